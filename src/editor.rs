/// The host's view of the text an operation works on.
///
/// An editor hands out its current selection and accepts a replacement for
/// it. Operations never see anything else of the document.
pub trait Editor {
    /// The currently selected text. Empty when nothing is selected.
    fn selection(&self) -> &str;

    /// Replace the selected text with `replacement`.
    fn replace_selection(&mut self, replacement: &str);
}

/// A whole string acts as an editor whose selection is everything in it.
///
/// ```rust
/// # use markdown_strip::{Config, Editor, Operation, PatternKey};
/// let mut text = String::from("**done**");
/// Operation::Pattern(PatternKey::Asterisk).run(&mut text, &Config::default());
/// assert_eq!(text.selection(), "done");
/// ```
impl Editor for String {
    fn selection(&self) -> &str {
        self
    }

    fn replace_selection(&mut self, replacement: &str) {
        self.clear();
        self.push_str(replacement);
    }
}

/// Title of the context menu entry that opens the chooser.
pub const CONTEXT_MENU_TITLE: &str = "Remove Markdown";

/// The context menu entry is only offered while something is selected.
pub fn context_menu_available(editor: &impl Editor) -> bool {
    !editor.selection().is_empty()
}
