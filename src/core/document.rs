//! In-memory document: the text buffer and its save-state metadata.
//!
//! The modified flag is not stored. It is derived by comparing the buffer
//! against the content last loaded from or saved to disk, so it can never
//! drift from what is actually on screen.

use std::path::{Path, PathBuf};

use crate::utils::file_helper;

/// Name shown in the title bar for a document that has never been saved.
pub const UNSAVED_NAME: &str = "Unsaved Document";

/// The single document owned by the editor.
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    baseline: String,
    path: Option<PathBuf>,
}

impl Document {
    /// Create an empty, unsaved document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the text widget. Edits made through this
    /// reference are reflected by `modified()` immediately.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// True when the buffer differs from the last loaded or saved content.
    pub fn modified(&self) -> bool {
        self.text != self.baseline
    }

    /// Replace the whole buffer with freshly loaded content.
    pub fn replace(&mut self, text: String, path: PathBuf) {
        self.baseline.clone_from(&text);
        self.text = text;
        self.path = Some(path);
    }

    /// Reset to an empty, unsaved document.
    pub fn clear(&mut self) {
        self.text.clear();
        self.baseline.clear();
        self.path = None;
    }

    /// Record that the current buffer now matches the file at `path`.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.baseline.clone_from(&self.text);
        self.path = Some(path);
    }

    /// File name of the current path, or the unsaved placeholder.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(file_helper::get_file_name)
            .unwrap_or_else(|| UNSAVED_NAME.to_string())
    }

    /// Window title, e.g. `MyGedit - notes.txt*` when there are unsaved changes.
    pub fn window_title(&self, app_name: &str) -> String {
        let marker = if self.modified() { "*" } else { "" };
        format!("{} - {}{}", app_name, self.display_name(), marker)
    }
}
