//! Character classification
//!
//! Punctuation is decided by Unicode general category: every category in
//! the `P` super-category (Pc, Pd, Ps, Pe, Pi, Pf, Po) counts. Category data
//! comes from `unicode-general-category`, whose version (and with it the
//! Unicode version) is pinned in the manifest.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Coarse classification of a character, as seen by the filter rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Letter (general category L*)
    Alphabetic,
    /// Decimal digit (general category Nd)
    Digit,
    /// Unicode `White_Space`
    Whitespace,
    /// Punctuation (general category P*)
    Punctuation,
    /// Anything else: symbols, marks, other numbers, controls
    Other,
}

impl CharClass {
    /// Classify a character
    pub fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            return CharClass::Whitespace;
        }
        match get_general_category(ch) {
            GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter => CharClass::Alphabetic,
            GeneralCategory::DecimalNumber => CharClass::Digit,
            category if is_punctuation_category(category) => CharClass::Punctuation,
            _ => CharClass::Other,
        }
    }
}

fn is_punctuation_category(category: GeneralCategory) -> bool {
    matches!(
        category,
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Check whether a single character is punctuation
#[inline]
pub fn is_punctuation_char(ch: char) -> bool {
    is_punctuation_category(get_general_category(ch))
}

/// Check whether a string holding exactly one scalar value is punctuation
///
/// Fails closed: an empty string or a string of more than one scalar value
/// (including multi-scalar grapheme clusters) is never punctuation.
///
/// # Examples
///
/// ```
/// use unitext_core::is_punctuation;
///
/// assert!(is_punctuation("。"));
/// assert!(is_punctuation("-"));
/// assert!(!is_punctuation("a"));
/// assert!(!is_punctuation(""));
/// assert!(!is_punctuation(".."));
/// ```
pub fn is_punctuation(character: &str) -> bool {
    let mut chars = character.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => is_punctuation_char(ch),
        _ => false,
    }
}
