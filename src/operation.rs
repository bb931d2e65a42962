use std::borrow::Cow;

use crate::{remove_phrase, strip_markdown, Config, Editor, PatternKey};

/// Something the user can pick to clean up the selection: strip one markdown
/// pattern, or delete one of the configured custom phrases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Remove a markdown pattern, then tidy the indentation.
    Pattern(PatternKey),
    /// Remove the phrase in a custom phrase slot.
    CustomPhrase {
        /// 0-based slot in [`Config::custom_phrases`].
        index: usize,
    },
}

impl Operation {
    /// Name shown in the chooser, e.g. `Quote (>)` or `Custom Phrase 2`.
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            Self::Pattern(key) => key.descriptor().label.into(),
            Self::CustomPhrase { index } => format!("Custom Phrase {}", index + 1).into(),
        }
    }

    /// Stable command identifier, e.g. `remove-numbered-list` or `remove-custom-1`.
    pub fn command_id(&self) -> String {
        match self {
            Self::Pattern(key) => format!("remove-{key}"),
            Self::CustomPhrase { index } => format!("remove-custom-{}", index + 1),
        }
    }

    /// Name of the command in a command palette.
    pub fn command_name(&self) -> String {
        format!("Remove {}", self.label())
    }

    /// Compute the replacement for `selection`.
    ///
    /// Returns `None` when there is nothing to do: the selection is empty, or
    /// the custom phrase slot is blank.
    ///
    /// ```rust
    /// # use markdown_strip::{Config, Operation, PatternKey};
    /// let config = Config::default();
    /// let header = Operation::Pattern(PatternKey::Header);
    /// assert_eq!(header.apply("#   Notes\n  body", &config).as_deref(), Some("Notes\nbody"));
    /// assert_eq!(header.apply("", &config), None);
    /// ```
    pub fn apply(&self, selection: &str, config: &Config) -> Option<String> {
        if selection.is_empty() {
            tracing::debug!(operation = %self.command_id(), "empty selection");
            return None;
        }
        let rewrite = match *self {
            Self::Pattern(key) => strip_markdown(selection, key),
            Self::CustomPhrase { index } => {
                let phrase = config.custom_phrase(index)?;
                remove_phrase(selection, phrase).into_owned()
            }
        };
        Some(rewrite)
    }

    /// Apply to the editor's selection and write the result back.
    ///
    /// Returns whether the selection was replaced.
    pub fn run(&self, editor: &mut impl Editor, config: &Config) -> bool {
        let Some(rewrite) = self.apply(editor.selection(), config) else {
            return false;
        };
        tracing::trace!(
            operation = %self.command_id(),
            rewrite = rewrite.as_str(),
            "replace_selection"
        );
        editor.replace_selection(&rewrite);
        true
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl Config {
    /// Operations on offer: enabled patterns in display order, then custom
    /// phrases whose slot isn't blank. This is both the command list and the
    /// chooser list.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        let patterns = self.enabled_patterns().map(Operation::Pattern);
        let phrases = (0..self.custom_phrases().len())
            .filter(move |index| self.custom_phrase(*index).is_some())
            .map(|index| Operation::CustomPhrase { index });
        patterns.chain(phrases)
    }

    /// Chooser entries, one label per operation.
    pub fn chooser_items(&self) -> Vec<Cow<'static, str>> {
        self.operations().map(|operation| operation.label()).collect()
    }

    /// The operation a chooser entry stands for.
    pub fn resolve_choice(&self, item: &str) -> Option<Operation> {
        self.operations().find(|operation| operation.label() == item)
    }
}
