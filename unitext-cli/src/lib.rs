//! unitext CLI library
//!
//! This library provides the command-line interface over `unitext-core`:
//! punctuation stripping, run collapsing, sentence-end checks and
//! character classification for files, inline text or stdin.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
