//! Unicode punctuation classification and normalization
//!
//! This crate classifies single characters (punctuation, CJK script
//! membership), removes punctuation from text while keeping marks that
//! carry meaning in context, collapses runs of consecutive punctuation and
//! detects language-specific sentence-end punctuation.
//!
//! Every operation is a pure function over its input. The only shared data
//! are read-only tables initialised once, so all functions can be called
//! from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use unitext_core::{
//!     is_sentence_end_with_punctuation, remove_consecutive_punctuations, remove_punctuations,
//!     PunctuationMode,
//! };
//!
//! let cleaned = remove_punctuations("It's 3.5 km/h, right?", PunctuationMode::Advanced);
//! assert_eq!(cleaned, "It's 3.5 km/h right");
//!
//! assert_eq!(remove_consecutive_punctuations("真的吗？！！"), "真的吗？");
//! assert!(is_sentence_end_with_punctuation("終わり。", "ja").unwrap());
//! ```

pub mod character_window;
pub mod cjk;
pub mod classifier;
pub mod collapse;
pub mod error;
pub mod filter;
pub mod language;
pub mod sentence_end;

pub use character_window::CharacterWindow;
pub use cjk::{is_cjk_char, is_cjk_character, CJK_RANGES};
pub use classifier::{is_punctuation, is_punctuation_char, CharClass};
pub use collapse::remove_consecutive_punctuations;
pub use error::{Error, Result};
pub use filter::{
    remove_punctuations, remove_punctuations_with, ContractionRules, DecimalPolicy, FilterRules,
    PunctuationMode,
};
pub use language::{supported_languages, Language, SentenceEndSet};
pub use sentence_end::{ends_with_sentence_punctuation, is_sentence_end_with_punctuation};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
