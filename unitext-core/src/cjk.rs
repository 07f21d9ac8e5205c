//! CJK script membership by code point
//!
//! The table covers the unified ideograph blocks (base plus extensions A-I),
//! both compatibility ideograph blocks, the Japanese kana blocks, Hangul
//! syllables and Bopomofo. Ranges are inclusive and disjoint.

/// Inclusive CJK code point ranges, sorted by start for binary search
pub const CJK_RANGES: [(u32, u32); 16] = [
    (0x3040, 0x309F),   // Hiragana
    (0x30A0, 0x30FF),   // Katakana
    (0x3100, 0x312F),   // Bopomofo
    (0x3400, 0x4DBF),   // CJK Unified Ideographs Extension A
    (0x4E00, 0x9FFF),   // CJK Unified Ideographs
    (0xAC00, 0xD7AF),   // Hangul Syllables
    (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
    (0x20000, 0x2A6DF), // Extension B
    (0x2A700, 0x2B73F), // Extension C
    (0x2B740, 0x2B81F), // Extension D
    (0x2B820, 0x2CEAF), // Extension E
    (0x2CEB0, 0x2EBEF), // Extension F
    (0x2EBF0, 0x2EE5F), // Extension I
    (0x2F800, 0x2FA1F), // CJK Compatibility Ideographs Supplement
    (0x30000, 0x3134F), // Extension G
    (0x31350, 0x323AF), // Extension H
];

/// Check whether a code point belongs to a CJK script block
///
/// Accepts any integer so that callers holding raw code points (including
/// surrogates or values beyond U+10FFFF) get a plain `false` instead of a
/// conversion error.
///
/// # Examples
///
/// ```
/// use unitext_core::is_cjk_character;
///
/// assert!(is_cjk_character('中' as u32));
/// assert!(is_cjk_character('カ' as u32));
/// assert!(!is_cjk_character('A' as u32));
/// ```
pub fn is_cjk_character(code_point: u32) -> bool {
    // Index of the first range starting after the code point
    let idx = CJK_RANGES.partition_point(|&(start, _)| start <= code_point);
    idx > 0 && code_point <= CJK_RANGES[idx - 1].1
}

/// Check whether a character belongs to a CJK script block
#[inline]
pub fn is_cjk_char(ch: char) -> bool {
    is_cjk_character(ch as u32)
}
