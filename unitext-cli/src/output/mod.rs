//! Output formatting module

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One unit of command output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    /// Result of `strip` or `collapse` for one input
    Transformed {
        source: String,
        text: String,
    },
    /// Result of `check-end` for one line
    SentenceEnd {
        source: String,
        line: usize,
        text: String,
        ends_with_punctuation: bool,
    },
    /// Classification of one character
    Character {
        character: char,
        code_point: String,
        punctuation: bool,
        cjk: bool,
    },
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single record
    fn write_record(&mut self, record: &Record) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON array of records
    Json,
}

/// Create a formatter writing to a file, or stdout when no path is given
pub fn create_formatter(
    format: OutputFormat,
    output: Option<&Path>,
    pretty_json: bool,
) -> Result<Box<dyn OutputFormatter>> {
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    Ok(match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    })
}
