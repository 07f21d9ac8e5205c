//! Configuration structures and validation
//!
//! This module defines the TOML schema for language tables.

use serde::{Deserialize, Serialize};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub sentence_end: SentenceEnd,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Sentence-end punctuation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceEnd {
    /// Suffix strings; multi-character marks such as "..." are allowed
    pub patterns: Vec<String>,
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if self.sentence_end.patterns.is_empty() {
            return Err("No sentence-end patterns defined".to_string());
        }

        if self.sentence_end.patterns.iter().any(String::is_empty) {
            return Err("Sentence-end patterns must not be empty strings".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> LanguageConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_parse_and_validate() {
        let config = parse(
            r#"
[metadata]
code = "xx"
name = "Test"

[sentence_end]
patterns = [".", "..."]
"#,
        );
        assert_eq!(config.metadata.code, "xx");
        assert_eq!(config.sentence_end.patterns, vec![".", "..."]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_patterns_rejected() {
        let config = parse(
            r#"
[metadata]
code = "xx"
name = "Test"

[sentence_end]
patterns = []
"#,
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_string_pattern_rejected() {
        let config = parse(
            r#"
[metadata]
code = "xx"
name = "Test"

[sentence_end]
patterns = [".", ""]
"#,
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_section_fails_to_parse() {
        let result: Result<LanguageConfig, _> = toml::from_str(
            r#"
[metadata]
code = "xx"
name = "Test"
"#,
        );
        assert!(result.is_err());
    }
}
