//! Sentence-end punctuation detection

use crate::error::Result;
use crate::language::Language;

/// Check whether text ends with sentence-end punctuation of a language
///
/// `language_tag` is one of `zh`, `en`, `ja`, `ko`, compared without regard
/// to case. Empty text is never a sentence end and is answered before the
/// tag is looked at.
///
/// # Errors
///
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for an
/// unsupported tag.
///
/// # Examples
///
/// ```
/// use unitext_core::is_sentence_end_with_punctuation;
///
/// assert!(is_sentence_end_with_punctuation("段。", "zh").unwrap());
/// assert!(is_sentence_end_with_punctuation("끝.", "KO").unwrap());
/// assert!(!is_sentence_end_with_punctuation("end", "en").unwrap());
/// assert!(is_sentence_end_with_punctuation("x", "fr").is_err());
/// ```
pub fn is_sentence_end_with_punctuation(text: &str, language_tag: &str) -> Result<bool> {
    if text.is_empty() {
        return Ok(false);
    }

    let language = Language::from_code(language_tag)?;
    ends_with_sentence_punctuation(text, language)
}

/// Check whether text ends with sentence-end punctuation of a known language
pub fn ends_with_sentence_punctuation(text: &str, language: Language) -> Result<bool> {
    Ok(language.sentence_end_set()?.matches_suffix(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_chinese() {
        for text in ["段。", "吗？", "啊！", "如下；", "然后…", "然后……"] {
            assert_eq!(is_sentence_end_with_punctuation(text, "zh"), Ok(true), "{text}");
        }
        assert_eq!(is_sentence_end_with_punctuation("你好，", "zh"), Ok(false));
        assert_eq!(is_sentence_end_with_punctuation("end.", "zh"), Ok(false));
    }

    #[test]
    fn test_english() {
        for text in ["end.", "why?", "stop!", "so;", "and…", "and..."] {
            assert_eq!(is_sentence_end_with_punctuation(text, "en"), Ok(true), "{text}");
        }
        assert_eq!(is_sentence_end_with_punctuation("end", "en"), Ok(false));
        assert_eq!(is_sentence_end_with_punctuation("end,", "en"), Ok(false));
        assert_eq!(is_sentence_end_with_punctuation("段。", "en"), Ok(false));
    }

    #[test]
    fn test_japanese_has_no_single_ellipsis() {
        assert_eq!(is_sentence_end_with_punctuation("終わり。", "ja"), Ok(true));
        assert_eq!(is_sentence_end_with_punctuation("終わり……", "ja"), Ok(true));
        assert_eq!(is_sentence_end_with_punctuation("終わり…", "ja"), Ok(false));
    }

    #[test]
    fn test_korean_accepts_both_widths() {
        for text in ["끝.", "끝!", "끝?", "끝;", "끝。", "끝！", "끝？", "끝；", "끝…", "끝..."] {
            assert_eq!(is_sentence_end_with_punctuation(text, "ko"), Ok(true), "{text}");
        }
        assert_eq!(is_sentence_end_with_punctuation("끝.", "KO"), Ok(true));
    }

    #[test]
    fn test_empty_text() {
        for tag in ["zh", "en", "ja", "ko"] {
            assert_eq!(is_sentence_end_with_punctuation("", tag), Ok(false));
        }
    }

    #[test]
    fn test_unsupported_language() {
        let err = is_sentence_end_with_punctuation("x", "fr").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn test_typed_language() {
        assert_eq!(ends_with_sentence_punctuation("Done!", Language::English), Ok(true));
        assert_eq!(ends_with_sentence_punctuation("", Language::English), Ok(false));
    }
}
