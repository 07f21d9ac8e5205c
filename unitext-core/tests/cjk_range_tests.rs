//! Boundary tests for the CJK range table

use proptest::prelude::*;
use unitext_core::{is_cjk_char, is_cjk_character, CJK_RANGES};

/// Named ranges as they appear in the Unicode block list
const NAMED_RANGES: [(&str, u32, u32); 16] = [
    ("CJK Unified Ideographs", 0x4E00, 0x9FFF),
    ("Extension A", 0x3400, 0x4DBF),
    ("Extension B", 0x20000, 0x2A6DF),
    ("Extension C", 0x2A700, 0x2B73F),
    ("Extension D", 0x2B740, 0x2B81F),
    ("Extension E", 0x2B820, 0x2CEAF),
    ("Extension F", 0x2CEB0, 0x2EBEF),
    ("Extension G", 0x30000, 0x3134F),
    ("Extension H", 0x31350, 0x323AF),
    ("Extension I", 0x2EBF0, 0x2EE5F),
    ("Compatibility Ideographs", 0xF900, 0xFAFF),
    ("Compatibility Ideographs Supplement", 0x2F800, 0x2FA1F),
    ("Hiragana", 0x3040, 0x309F),
    ("Katakana", 0x30A0, 0x30FF),
    ("Hangul Syllables", 0xAC00, 0xD7AF),
    ("Bopomofo", 0x3100, 0x312F),
];

fn in_any_range(cp: u32) -> bool {
    NAMED_RANGES
        .iter()
        .any(|&(_, start, end)| (start..=end).contains(&cp))
}

#[test]
fn test_table_matches_named_ranges() {
    let mut expected: Vec<(u32, u32)> = NAMED_RANGES.iter().map(|&(_, s, e)| (s, e)).collect();
    expected.sort_unstable();
    assert_eq!(CJK_RANGES.to_vec(), expected);
}

#[test]
fn test_range_ends_are_inclusive() {
    for (name, start, end) in NAMED_RANGES {
        assert!(is_cjk_character(start), "{name}: start {start:#X}");
        assert!(is_cjk_character(end), "{name}: end {end:#X}");
        assert!(is_cjk_character(start + (end - start) / 2), "{name}: middle");
    }
}

#[test]
fn test_just_outside_each_range() {
    for (name, start, end) in NAMED_RANGES {
        // Adjacent blocks (e.g. Hiragana/Katakana) make the neighbour CJK too
        let before = start - 1;
        assert_eq!(is_cjk_character(before), in_any_range(before), "{name}: {before:#X}");
        let after = end + 1;
        assert_eq!(is_cjk_character(after), in_any_range(after), "{name}: {after:#X}");
    }
}

#[test]
fn test_known_outside_points() {
    for cp in [
        0x303F, 0x3130, 0x33FF, 0x4DC0, 0xABFF, 0xD7B0, 0xF8FF, 0xFB00, 0x1FFFF, 0x2A6E0,
        0x2EE60, 0x2F7FF, 0x2FA20, 0x2FFFF, 0x323B0,
    ] {
        assert!(!is_cjk_character(cp), "{cp:#X} should be outside");
    }
}

#[test]
fn test_narrow_table_is_not_used() {
    // Only the full table covers these
    assert!(is_cjk_char('ㄅ'));
    assert!(is_cjk_char('\u{2A700}'));
    assert!(is_cjk_char('\u{2F800}'));
    assert!(is_cjk_char('\u{31350}'));
}

proptest! {
    #[test]
    fn prop_matches_linear_scan(cp in 0u32..0x40000) {
        prop_assert_eq!(is_cjk_character(cp), in_any_range(cp));
    }

    #[test]
    fn prop_char_and_code_point_agree(ch in any::<char>()) {
        prop_assert_eq!(is_cjk_char(ch), is_cjk_character(ch as u32));
    }
}
