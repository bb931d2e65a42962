use std::borrow::Cow;

use crate::pattern::{Matcher, PatternKey};

/// Remove every occurrence of the markdown construct `key` from `text`.
///
/// Content markers (`*`, `` ` ``, `$`, `=`, `%%...%%`) are removed wherever they
/// appear. Block markers (headers, lists, quotes, tasks) are removed only at
/// the start of a line; indentation in front of them is left for
/// [`normalize_indentation`](crate::normalize_indentation).
///
/// ```rust
/// # use markdown_strip::{remove_pattern, PatternKey};
/// assert_eq!(remove_pattern("*italic* and **bold**", PatternKey::Asterisk), "italic and bold");
/// assert_eq!(remove_pattern("# Title\n## Sub", PatternKey::Header), "Title\nSub");
/// ```
pub fn remove_pattern(text: &str, key: PatternKey) -> Cow<'_, str> {
    let rewrite = match &key.descriptor().matcher {
        Matcher::Delimiter(delimiter) if text.contains(*delimiter) => {
            Cow::Owned(text.replace(*delimiter, ""))
        }
        Matcher::Delimiter(_) => Cow::Borrowed(text),
        Matcher::Expression { regex, replacement } => regex.replace_all(text, *replacement),
    };
    tracing::trace!(%key, changed = matches!(rewrite, Cow::Owned(_)), "remove_pattern");
    rewrite
}

/// Like [`remove_pattern`], but looks the pattern up by its textual key.
///
/// An unknown key leaves the text unchanged, so settings written by a newer
/// version never break an older one.
///
/// ```rust
/// # use markdown_strip::remove_pattern_by_key;
/// assert_eq!(remove_pattern_by_key("1. First", "numbered-list"), "First");
/// assert_eq!(remove_pattern_by_key("~~gone~~", "strikethrough"), "~~gone~~");
/// ```
pub fn remove_pattern_by_key<'t>(text: &'t str, key: &str) -> Cow<'t, str> {
    match key.parse::<PatternKey>() {
        Ok(key) => remove_pattern(text, key),
        Err(e) => {
            tracing::debug!(%e, "leaving text unchanged");
            Cow::Borrowed(text)
        }
    }
}
