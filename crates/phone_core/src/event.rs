//! Edit events: what the UI layer reports for each live field mutation.
//!
//! An event carries the field exactly as it was when the user acted; the
//! pipeline derives the new text itself so that insertion, deletion and
//! caret placement all agree on one view of the edit.

/// One text mutation, as observed by the host before applying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    /// Field text before the edit.
    pub text: String,
    /// Selection at that moment, in byte offsets. Equal offsets are a caret.
    /// Offsets are clamped to character boundaries, not trusted.
    pub selection_start: usize,
    pub selection_end: usize,
    pub kind: EditKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    /// A typed character, replacing the selection.
    Insert(char),
    /// Delete backwards: the selection, or the character before the caret.
    Backspace,
    /// Delete forwards: the selection, or the character after the caret.
    DeleteForward,
    /// Remove the selection. Clipboard contents are the host's business.
    Cut,
    /// Splice clipboard text over the selection.
    Paste(String),
}

impl EditEvent {
    /// Event at a collapsed selection.
    pub fn at_caret(text: &str, caret: usize, kind: EditKind) -> Self {
        Self {
            text: text.to_string(),
            selection_start: caret,
            selection_end: caret,
            kind,
        }
    }

    /// Event over a selected range.
    pub fn over_selection(text: &str, start: usize, end: usize, kind: EditKind) -> Self {
        Self {
            text: text.to_string(),
            selection_start: start,
            selection_end: end,
            kind,
        }
    }
}
