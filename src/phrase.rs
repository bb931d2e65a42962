use std::borrow::Cow;

/// Delete every literal occurrence of `phrase` from `text`.
///
/// The phrase is not a pattern: regex metacharacters match themselves, and
/// there are no word boundaries (`cat` is also removed from `category`).
/// A blank phrase removes nothing.
///
/// ```rust
/// # use markdown_strip::remove_phrase;
/// assert_eq!(remove_phrase("foo bar foo", "foo"), " bar ");
/// ```
pub fn remove_phrase<'t>(text: &'t str, phrase: &str) -> Cow<'t, str> {
    if phrase.trim().is_empty() || !text.contains(phrase) {
        return Cow::Borrowed(text);
    }
    tracing::trace!(phrase, "remove_phrase");
    Cow::Owned(text.replace(phrase, ""))
}
