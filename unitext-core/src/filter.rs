//! Contextual punctuation filter
//!
//! Removes punctuation from text while keeping marks that carry meaning in
//! their immediate context: apostrophes inside words, decimal points,
//! slashes in dates and units, percent signs and hyphens. Every decision
//! looks only at the scalar values directly left and right of the mark in
//! the original text.

use std::fmt;
use std::str::FromStr;

use crate::character_window::CharacterWindow;
use crate::classifier::{is_punctuation_char, CharClass};
use crate::error::{Error, Result};

/// How apostrophes are preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContractionRules {
    /// Only between two letters ("don't")
    #[default]
    Basic,
    /// Also possessives ("John's") and plural possessives ("workers'")
    Extended,
}

/// How `.` is preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalPolicy {
    /// Always dropped
    #[default]
    Never,
    /// Kept when it reads as a decimal point ("3.14", "5.", ".5")
    NumericContext,
    /// Always kept
    Always,
}

/// Rule table for [`remove_punctuations_with`]
///
/// `%` and `-` are always kept; every other punctuation mark not covered by
/// a rule below is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterRules {
    /// Apostrophe handling
    pub contractions: ContractionRules,
    /// Dot handling
    pub decimal: DecimalPolicy,
    /// Keep `/` between two digits or two letters
    pub preserve_slash: bool,
}

impl FilterRules {
    /// English-oriented filter: contractions, percent and hyphen
    pub const GENERAL: Self = Self {
        contractions: ContractionRules::Basic,
        decimal: DecimalPolicy::Never,
        preserve_slash: false,
    };

    /// Chinese-context filter: like general, but every `.` is kept
    pub const CHINESE_CONTEXT: Self = Self {
        contractions: ContractionRules::Basic,
        decimal: DecimalPolicy::Always,
        preserve_slash: false,
    };

    /// Full rule set: possessives, decimal points, dates, fractions and units
    pub const ADVANCED: Self = Self {
        contractions: ContractionRules::Extended,
        decimal: DecimalPolicy::NumericContext,
        preserve_slash: true,
    };

    /// Decide whether the current character of the window is emitted
    pub fn keeps(&self, window: &CharacterWindow) -> bool {
        let (prev, current, next) = window.context_triple();
        let Some(ch) = current else {
            return false;
        };

        if !is_punctuation_char(ch) {
            return true;
        }

        let prev = prev.map(CharClass::of);
        match ch {
            '\'' => self.keeps_apostrophe(prev, next),
            '.' => self.keeps_dot(prev, next.map(CharClass::of)),
            '/' => self.preserve_slash && keeps_slash(prev, next.map(CharClass::of)),
            '%' | '-' => true,
            _ => false,
        }
    }

    fn keeps_apostrophe(&self, prev: Option<CharClass>, next: Option<char>) -> bool {
        if prev != Some(CharClass::Alphabetic) {
            return false;
        }

        let next_class = next.map(CharClass::of);
        if next_class == Some(CharClass::Alphabetic) {
            // "don't" (also matches "John's" under basic rules)
            return true;
        }

        match self.contractions {
            ContractionRules::Basic => false,
            ContractionRules::Extended => match next {
                // "workers'" at end of text
                None => true,
                // "workers' pay"
                Some(n) => matches!(n, 's' | 'S') || next_class == Some(CharClass::Whitespace),
            },
        }
    }

    fn keeps_dot(&self, prev: Option<CharClass>, next: Option<CharClass>) -> bool {
        match self.decimal {
            DecimalPolicy::Never => false,
            DecimalPolicy::Always => true,
            DecimalPolicy::NumericContext => match (prev, next) {
                // "99.5"
                (Some(CharClass::Digit), Some(CharClass::Digit)) => true,
                // "5." and "5. "
                (Some(CharClass::Digit), None | Some(CharClass::Whitespace)) => true,
                // ".5"
                (None, Some(CharClass::Digit)) => true,
                _ => false,
            },
        }
    }
}

fn keeps_slash(prev: Option<CharClass>, next: Option<CharClass>) -> bool {
    matches!(
        (prev, next),
        (Some(CharClass::Digit), Some(CharClass::Digit))
            | (Some(CharClass::Alphabetic), Some(CharClass::Alphabetic))
    )
}

/// Shipped filter configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PunctuationMode {
    /// [`FilterRules::GENERAL`]
    General,
    /// [`FilterRules::CHINESE_CONTEXT`]
    ChineseContext,
    /// [`FilterRules::ADVANCED`]
    #[default]
    Advanced,
}

impl PunctuationMode {
    /// All modes, in documentation order
    pub const ALL: [PunctuationMode; 3] = [
        PunctuationMode::General,
        PunctuationMode::ChineseContext,
        PunctuationMode::Advanced,
    ];

    /// Rule table behind this mode
    pub fn rules(&self) -> FilterRules {
        match self {
            PunctuationMode::General => FilterRules::GENERAL,
            PunctuationMode::ChineseContext => FilterRules::CHINESE_CONTEXT,
            PunctuationMode::Advanced => FilterRules::ADVANCED,
        }
    }

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            PunctuationMode::General => "general",
            PunctuationMode::ChineseContext => "chinese-context",
            PunctuationMode::Advanced => "advanced",
        }
    }

    /// One-line description of what the mode preserves
    pub fn description(&self) -> &'static str {
        match self {
            PunctuationMode::General => "keeps contractions, percent signs and hyphens",
            PunctuationMode::ChineseContext => {
                "keeps contractions, percent signs, hyphens and every period"
            }
            PunctuationMode::Advanced => {
                "keeps contractions, possessives, decimals, dates, units, percent signs and hyphens"
            }
        }
    }
}

impl fmt::Display for PunctuationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PunctuationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "general" => Ok(PunctuationMode::General),
            "chinese" | "chinese-context" | "zh" => Ok(PunctuationMode::ChineseContext),
            "advanced" => Ok(PunctuationMode::Advanced),
            _ => Err(Error::InvalidArgument(format!(
                "Unsupported punctuation mode: {s}. Supported modes: 'general', 'chinese-context', 'advanced'"
            ))),
        }
    }
}

/// Remove punctuation using one of the shipped modes
///
/// # Examples
///
/// ```
/// use unitext_core::{remove_punctuations, PunctuationMode};
///
/// let text = "Don't pay 99.5% for km/h, John's workers' say!";
/// assert_eq!(
///     remove_punctuations(text, PunctuationMode::Advanced),
///     "Don't pay 99.5% for km/h John's workers' say"
/// );
/// assert_eq!(
///     remove_punctuations(text, PunctuationMode::General),
///     "Don't pay 995% for kmh John's workers say"
/// );
/// ```
pub fn remove_punctuations(text: &str, mode: PunctuationMode) -> String {
    remove_punctuations_with(text, &mode.rules())
}

/// Remove punctuation using a custom rule table
pub fn remove_punctuations_with(text: &str, rules: &FilterRules) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut window = CharacterWindow::new();

    while let Some(ch) = chars.next() {
        window.advance(ch, chars.peek().copied());
        if rules.keeps(&window) {
            result.push(ch);
        }
    }

    result
}
