//! Strip markdown formatting from selected text. [markdown_strip] removes one
//! kind of marker at a time (emphasis, code, math, highlights, comments,
//! headers, lists, quotes, tasks) and tidies the indentation left behind.
//!
//! [markdown_strip]: index.html
//!
//! # Getting Started
//!
//! ```rust
//! use markdown_strip::{normalize_indentation, remove_pattern, PatternKey};
//!
//! let markdown = r##"> A **bold** claim
//! >   that wraps
//! "##;
//!
//! let without_quotes = remove_pattern(markdown, PatternKey::Quote);
//! let without_bold = remove_pattern(&without_quotes, PatternKey::Asterisk);
//!
//! assert_eq!(without_bold, "A bold claim\nthat wraps\n");
//! # assert_eq!(normalize_indentation(&without_bold), "A bold claim\nthat wraps\n");
//! ```
//!
//! # Operations and Settings
//!
//! A [`Config`] decides which patterns are offered and holds up to three
//! custom phrases. Each offered [`Operation`] works on an [`Editor`]'s
//! selection.
//!
//! ```rust
//! use markdown_strip::{Config, Operation};
//!
//! let config = Config::from_json(r#"{
//!     "customPhrases": ["(draft)", "", ""],
//!     "enabledPatterns": { "comment": false }
//! }"#)?;
//!
//! let labels = config.chooser_items();
//! assert_eq!(labels.len(), 10);
//! assert_eq!(labels[9], "Custom Phrase 1");
//!
//! let mut selection = String::from("- [x] ship it (draft)\n  - [ ] tell everyone");
//! let task = config.resolve_choice("Task List (- [ ])").unwrap();
//! assert!(task.run(&mut selection, &config));
//! assert_eq!(selection, "ship it (draft)\ntell everyone");
//!
//! let phrase = Operation::CustomPhrase { index: 0 };
//! assert!(phrase.run(&mut selection, &config));
//! assert_eq!(selection, "ship it \ntell everyone");
//! # Ok::<(), markdown_strip::ConfigError>(())
//! ```

mod config;
mod editor;
mod indent;
mod operation;
mod pattern;
mod phrase;
mod remover;

pub use config::{Config, ConfigError, CUSTOM_PHRASE_SLOTS};
pub use editor::{context_menu_available, Editor, CONTEXT_MENU_TITLE};
pub use indent::normalize_indentation;
pub use operation::Operation;
pub use pattern::{patterns, ParsePatternKeyError, PatternDescriptor, PatternKey};
pub use phrase::remove_phrase;
pub use remover::{remove_pattern, remove_pattern_by_key};

/// Remove a pattern and tidy the indentation, the way a pattern
/// [`Operation`] does.
///
/// ```rust
/// # use markdown_strip::{strip_markdown, PatternKey};
/// let markdown = r##"#  Release notes
///   1. Faster startup
///   2. Fewer crashes
/// "##;
///
/// let stripped = r##"#  Release notes
/// Faster startup
/// Fewer crashes
/// "##;
///
/// assert_eq!(strip_markdown(markdown, PatternKey::NumberedList), stripped);
/// ```
pub fn strip_markdown(input: &str, key: PatternKey) -> String {
    tracing::trace!(%key, "strip_markdown");
    normalize_indentation(&remove_pattern(input, key))
}
