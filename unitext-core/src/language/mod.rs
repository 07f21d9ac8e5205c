//! Supported languages and their sentence-end tables

pub(crate) mod config;
pub(crate) mod loader;
pub mod tables;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub use tables::SentenceEndSet;

/// Languages with a sentence-end punctuation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Chinese (`zh`)
    Chinese,
    /// English (`en`)
    English,
    /// Japanese (`ja`)
    Japanese,
    /// Korean (`ko`)
    Korean,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 4] = [
        Language::Chinese,
        Language::English,
        Language::Japanese,
        Language::Korean,
    ];

    /// Create a Language from a tag, ignoring case
    ///
    /// Case folding uses full Unicode lowercasing, so U+212A KELVIN SIGN
    /// matches `k`.
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_lowercase().as_str() {
            "zh" => Ok(Language::Chinese),
            "en" => Ok(Language::English),
            "ja" => Ok(Language::Japanese),
            "ko" => Ok(Language::Korean),
            _ => {
                tracing::debug!(tag = code, "rejected language tag");
                Err(Error::InvalidArgument(format!(
                    "Unsupported language: {code}. Supported languages: 'zh', 'en', 'ja', 'ko'"
                )))
            }
        }
    }

    /// Get the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Korean => "ko",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Chinese => "Chinese",
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
        }
    }

    /// Sentence-end punctuation table of this language
    pub fn sentence_end_set(&self) -> Result<&'static SentenceEndSet> {
        loader::get_table(*self).map_err(Error::Configuration)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}

/// Codes of all supported languages
pub fn supported_languages() -> Vec<&'static str> {
    Language::ALL.iter().map(Language::code).collect()
}
