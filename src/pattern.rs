use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Identifier of a markdown construct the remover knows how to strip.
///
/// The set is closed. Its textual form is the kebab-case key used in
/// settings files and command ids, e.g. `numbered-list`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKey {
    /// `*` and `**` emphasis markers.
    Asterisk,
    /// Backtick code spans.
    InlineCode,
    /// `$` math delimiters.
    Latex,
    /// `==` highlight markers.
    Highlight,
    /// `%%` comment spans.
    Comment,
    /// ATX header markers.
    Header,
    /// Unordered list markers.
    List,
    /// Ordered list markers.
    NumberedList,
    /// Block quote markers.
    Quote,
    /// Task list markers.
    Task,
}

impl PatternKey {
    /// Every key, in the order patterns are offered to the user.
    pub const ALL: [PatternKey; 10] = [
        PatternKey::Asterisk,
        PatternKey::InlineCode,
        PatternKey::Latex,
        PatternKey::Highlight,
        PatternKey::Comment,
        PatternKey::Header,
        PatternKey::List,
        PatternKey::NumberedList,
        PatternKey::Quote,
        PatternKey::Task,
    ];

    /// The kebab-case key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asterisk => "asterisk",
            Self::InlineCode => "inline-code",
            Self::Latex => "latex",
            Self::Highlight => "highlight",
            Self::Comment => "comment",
            Self::Header => "header",
            Self::List => "list",
            Self::NumberedList => "numbered-list",
            Self::Quote => "quote",
            Self::Task => "task",
        }
    }

    /// Whether the pattern is offered when a settings record doesn't mention it.
    pub fn enabled_by_default(self) -> bool {
        true
    }

    /// Line-anchored patterns only ever match at the start of a line.
    pub fn is_line_anchored(self) -> bool {
        matches!(
            self,
            Self::Header | Self::List | Self::NumberedList | Self::Quote | Self::Task
        )
    }

    /// The descriptor of this pattern in the shared table.
    pub fn descriptor(self) -> &'static PatternDescriptor {
        &PATTERNS[self as usize]
    }
}

impl std::fmt::Display for PatternKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string didn't name any known [`PatternKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown markdown pattern `{0}`")]
pub struct ParsePatternKeyError(String);

impl std::str::FromStr for PatternKey {
    type Err = ParsePatternKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParsePatternKeyError(s.to_owned()))
    }
}

/// How a pattern locates the text it deletes.
#[derive(Debug)]
pub(crate) enum Matcher {
    /// Delete every occurrence of a single delimiter character.
    Delimiter(char),
    /// Replace every match of `regex` with `replacement`.
    Expression {
        regex: Regex,
        replacement: &'static str,
    },
}

impl Matcher {
    /// Delete whole spans matching `pattern`.
    fn span(pattern: &str) -> Self {
        Self::Expression {
            regex: compile(pattern),
            replacement: "",
        }
    }

    /// Delete one or more consecutive `marker`s at the start of each line.
    ///
    /// Indentation in front of the first marker is kept.
    fn line_prefix(marker: &str) -> Self {
        Self::Expression {
            regex: compile(&format!(r"(?m)^(?P<indent>[ \t]*)(?:{marker})+")),
            replacement: "${indent}",
        }
    }
}

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(e) => panic!("invalid built-in pattern {pattern:?}: {e}"),
    }
}

/// A markdown construct that can be removed, with the text shown for it in
/// menus and settings.
#[derive(Debug)]
pub struct PatternDescriptor {
    /// Identifier of the pattern.
    pub key: PatternKey,
    /// Name shown in command palettes and choosers.
    pub label: &'static str,
    /// Sample of the markup the pattern removes.
    pub example: &'static str,
    pub(crate) matcher: Matcher,
}

/// Indexed by `PatternKey as usize`, so rows follow [`PatternKey::ALL`].
static PATTERNS: LazyLock<[PatternDescriptor; 10]> = LazyLock::new(|| {
    let row = |key: PatternKey,
               label: &'static str,
               example: &'static str,
               matcher: Matcher| PatternDescriptor {
        key,
        label,
        example,
        matcher,
    };
    [
        row(
            PatternKey::Asterisk,
            "Asterisk (*, **)",
            "*italic* or **bold**",
            Matcher::Delimiter('*'),
        ),
        row(
            PatternKey::InlineCode,
            "Inline Code (`)",
            "`inline code`",
            Matcher::Delimiter('`'),
        ),
        row(
            PatternKey::Latex,
            "LaTeX ($)",
            "$latex$",
            Matcher::Delimiter('$'),
        ),
        row(
            PatternKey::Highlight,
            "Highlight (=)",
            "==highlight==",
            Matcher::Delimiter('='),
        ),
        row(
            PatternKey::Comment,
            "Comment (%)",
            "%%comment%%",
            // An opener without a closer doesn't match and stays in the text.
            Matcher::span(r"(?s)%%.*?%%"),
        ),
        row(
            PatternKey::Header,
            "Header (#)",
            "# Header, #Tag",
            Matcher::line_prefix(r"#+(?:[ \t]+|$)"),
        ),
        row(
            PatternKey::List,
            "Unordered List (-)",
            "- List item",
            Matcher::line_prefix(r"[-*+][ \t]+"),
        ),
        row(
            PatternKey::NumberedList,
            "Numbered List (1.)",
            "1. List item (⚠️ May affect numbers like \"2025. Plan\")",
            // Also strips a line like `2025. Plan`. Known and accepted.
            Matcher::line_prefix(r"[0-9]+\.[ \t]+"),
        ),
        row(
            PatternKey::Quote,
            "Quote (>)",
            "> Quoted text",
            Matcher::line_prefix(r">[ \t]*"),
        ),
        row(
            PatternKey::Task,
            "Task List (- [ ])",
            "- [ ] / - [x] Task item",
            Matcher::line_prefix(r"[-*][ \t]+\[[^\n]\][ \t]*"),
        ),
    ]
});

/// All pattern descriptors in display order.
pub fn patterns() -> &'static [PatternDescriptor] {
    PATTERNS.as_slice()
}
