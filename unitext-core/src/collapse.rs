//! Consecutive punctuation collapsing

use crate::classifier::is_punctuation_char;

/// Collapse each run of consecutive punctuation to its first mark
///
/// The marks in a run need not be identical: "！？。" collapses to "！".
/// Runs are determined by the input text alone; applying the function twice
/// gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use unitext_core::remove_consecutive_punctuations;
///
/// assert_eq!(remove_consecutive_punctuations("你好，，，世界"), "你好，世界");
/// assert_eq!(remove_consecutive_punctuations("测试！？。结束"), "测试！结束");
/// ```
pub fn remove_consecutive_punctuations(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_is_punct = false;

    for ch in text.chars() {
        let is_punct = is_punctuation_char(ch);
        if is_punct && prev_is_punct {
            continue;
        }
        result.push(ch);
        prev_is_punct = is_punct;
    }

    result
}
