//! Sentence-end suffix lookup
//!
//! Single-character marks go through an ASCII table with a hash fallback;
//! the few multi-character marks (ellipses) are compared as suffixes.

use std::collections::HashSet;

use smallvec::SmallVec;

/// Fixed set of sentence-terminating punctuation strings for one language
#[derive(Debug, Clone)]
pub struct SentenceEndSet {
    /// ASCII lookup table for single-character marks 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII single-character marks
    non_ascii: HashSet<char>,
    /// Marks longer than one scalar value
    multi_char: SmallVec<[String; 4]>,
    /// Every pattern in table order
    patterns: Vec<String>,
}

impl SentenceEndSet {
    /// Build from a list of punctuation strings; empty strings are ignored
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();
        let mut multi_char = SmallVec::new();
        let mut all = Vec::new();

        for pattern in patterns {
            let pattern: String = pattern.into();
            let mut chars = pattern.chars();
            match (chars.next(), chars.next()) {
                (None, _) => continue,
                (Some(ch), None) if ch.is_ascii() => ascii_table[ch as usize] = true,
                (Some(ch), None) => {
                    non_ascii.insert(ch);
                }
                _ => multi_char.push(pattern.clone()),
            }
            all.push(pattern);
        }

        Self {
            ascii_table,
            non_ascii,
            multi_char,
            patterns: all,
        }
    }

    /// Check if a single character is one of the marks
    #[inline]
    pub fn is_single_mark(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Check if text ends with any mark of the set
    pub fn matches_suffix(&self, text: &str) -> bool {
        let Some(last) = text.chars().next_back() else {
            return false;
        };

        self.is_single_mark(last)
            || self
                .multi_char
                .iter()
                .any(|pattern| text.ends_with(pattern.as_str()))
    }

    /// Marks of the set, in table order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
