//! Property tests for the removal engine.
//!
//! Inputs are drawn from an alphabet dense in markdown markers so that the
//! interesting cases (adjacent markers, unterminated spans, indented blocks)
//! come up often.

use markdown_strip::{
    normalize_indentation, remove_pattern, remove_pattern_by_key, remove_phrase, PatternKey,
};
use proptest::prelude::*;

const MARKDOWN_ALPHABET: &str = "[-*+#>%=$`\\[\\]x0-9. \t\n\u{3000}é]{0,64}";

fn pattern_key() -> impl Strategy<Value = PatternKey> {
    proptest::sample::select(PatternKey::ALL.to_vec())
}

proptest! {
    #[test]
    fn removal_is_idempotent(text in MARKDOWN_ALPHABET, key in pattern_key()) {
        let once = remove_pattern(&text, key).into_owned();
        let twice = remove_pattern(&once, key).into_owned();
        prop_assert_eq!(once, twice, "{} changed already stripped text", key);
    }

    #[test]
    fn removal_never_grows_text(text in MARKDOWN_ALPHABET, key in pattern_key()) {
        prop_assert!(remove_pattern(&text, key).len() <= text.len());
    }

    #[test]
    fn unknown_key_is_identity(text in MARKDOWN_ALPHABET, key in "[a-z]{1,12}-unknown") {
        prop_assert_eq!(remove_pattern_by_key(&text, &key), text.as_str());
    }

    #[test]
    fn content_markers_leave_no_delimiter(text in MARKDOWN_ALPHABET) {
        for (key, delimiter) in [
            (PatternKey::Asterisk, '*'),
            (PatternKey::InlineCode, '`'),
            (PatternKey::Latex, '$'),
            (PatternKey::Highlight, '='),
        ] {
            prop_assert!(!remove_pattern(&text, key).contains(delimiter));
        }
    }

    #[test]
    fn line_anchored_removal_keeps_line_count(text in MARKDOWN_ALPHABET, key in pattern_key()) {
        prop_assume!(key.is_line_anchored());
        let stripped = remove_pattern(&text, key);
        prop_assert_eq!(stripped.split('\n').count(), text.split('\n').count());
    }

    #[test]
    fn normalizer_dedents_at_most_three(text in MARKDOWN_ALPHABET) {
        let normalized = normalize_indentation(&text);
        let before = text.split('\n').collect::<Vec<_>>();
        let after = normalized.split('\n').collect::<Vec<_>>();
        prop_assert_eq!(before.len(), after.len());
        for (line, cleaned) in before.into_iter().zip(after) {
            if line.trim().is_empty() {
                prop_assert_eq!(cleaned, "");
                continue;
            }
            prop_assert!(line.ends_with(cleaned));
            let removed = &line[..line.len() - cleaned.len()];
            prop_assert!(removed.chars().count() <= 3);
            prop_assert!(removed.chars().all(char::is_whitespace));
        }
    }

    #[test]
    fn phrase_removal_shrinks_by_whole_phrases(text in MARKDOWN_ALPHABET, phrase in "[-*x0-9]{1,3}") {
        let stripped = remove_phrase(&text, &phrase);
        let removed = text.matches(phrase.as_str()).count();
        prop_assert_eq!(stripped.len(), text.len() - removed * phrase.len());
    }
}
