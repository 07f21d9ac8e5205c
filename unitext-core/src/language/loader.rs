//! Language table loader
//!
//! Sentence-end tables are embedded TOML documents, parsed once on first
//! access and shared read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::LanguageConfig;
use super::tables::SentenceEndSet;
use super::Language;

/// Embedded language tables
static EMBEDDED: OnceLock<HashMap<Language, SentenceEndSet>> = OnceLock::new();

fn embedded_source(language: Language) -> &'static str {
    match language {
        Language::Chinese => include_str!("../../configs/languages/chinese.toml"),
        Language::English => include_str!("../../configs/languages/english.toml"),
        Language::Japanese => include_str!("../../configs/languages/japanese.toml"),
        Language::Korean => include_str!("../../configs/languages/korean.toml"),
    }
}

/// Sentence-end table for a language
pub(crate) fn get_table(language: Language) -> Result<&'static SentenceEndSet, String> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for language in Language::ALL {
            match load_embedded_language(language, embedded_source(language)) {
                Ok(set) => {
                    tracing::debug!(
                        language = language.code(),
                        patterns = set.patterns().len(),
                        "loaded sentence-end table"
                    );
                    map.insert(language, set);
                }
                Err(e) => {
                    tracing::warn!(language = language.code(), "failed to load table: {e}");
                }
            }
        }

        map
    });

    embedded
        .get(&language)
        .ok_or_else(|| format!("No sentence-end table for language: {}", language.code()))
}

/// Load embedded language from TOML string
fn load_embedded_language(language: Language, toml_str: &str) -> Result<SentenceEndSet, String> {
    let code = language.code();
    let config: LanguageConfig =
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse {code} config: {e}"))?;

    config.validate()?;

    if config.metadata.code != code {
        return Err(format!(
            "Config code mismatch: expected {code}, found {}",
            config.metadata.code
        ));
    }

    Ok(SentenceEndSet::new(config.sentence_end.patterns))
}
