//! Editor core: file and edit commands over the single document.
//!
//! Nothing here touches the widget toolkit. Modal dialogs are reached
//! through the [`Dialogs`] trait so every command can run headless.

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::cursor::CursorPosition;
use super::document::Document;
use super::selection;
use super::status::StatusBar;
use crate::utils::clipboard::ClipboardAccess;
use crate::utils::file_helper;

pub const APP_NAME: &str = "MyGedit";

pub const ABOUT_TITLE: &str = "About MyGedit";
pub const ABOUT_TEXT: &str = "MyGedit - A simple text editor inspired by gedit.\n\n\
Built with Rust and egui.";

pub const SAVE_PROMPT: &str = "The document has been modified.\nDo you want to save your changes?";

/// Answer to the "save changes?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

/// Modal dialogs the editor needs from the host.
pub trait Dialogs {
    fn pick_open_file(&mut self) -> Option<PathBuf>;
    fn pick_save_file(&mut self, suggested_name: &str) -> Option<PathBuf>;
    fn confirm_discard(&mut self) -> SaveChoice;
    fn notify_error(&mut self, message: &str);
    fn show_about(&mut self, title: &str, text: &str);
}

/// Editor state: the document plus the status bar.
pub struct Editor {
    document: Document,
    status: StatusBar,
}

impl Editor {
    pub fn new(status_timeout: Duration) -> Self {
        Self {
            document: Document::new(),
            status: StatusBar::new(status_timeout),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusBar {
        &mut self.status
    }

    pub fn window_title(&self) -> String {
        self.document.window_title(APP_NAME)
    }

    /// Start an empty document. Returns false if the user backed out.
    pub fn new_file(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        if !self.maybe_save(dialogs) {
            return false;
        }
        self.document.clear();
        self.status.set_cursor(CursorPosition::default());
        log::debug!("New document");
        true
    }

    /// Ask for a file and load it. Returns true if a file was loaded.
    pub fn open(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        if !self.maybe_save(dialogs) {
            return false;
        }
        match dialogs.pick_open_file() {
            Some(path) => self.load_file(&path, dialogs),
            None => false,
        }
    }

    /// Replace the document with the contents of `path`.
    ///
    /// On failure the current document is left exactly as it was.
    pub fn load_file(&mut self, path: &Path, dialogs: &mut dyn Dialogs) -> bool {
        match file_helper::read_text(path) {
            Ok(text) => {
                log::info!("Loaded {} ({} bytes)", path.display(), text.len());
                self.document.replace(text, path.to_path_buf());
                self.status.set_cursor(CursorPosition::default());
                self.status.show_message("File loaded", Instant::now());
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                dialogs.notify_error(&e.to_string());
                false
            }
        }
    }

    /// Save to the current path, or ask for one. Returns true if written.
    pub fn save(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        match self.document.path().map(Path::to_path_buf) {
            Some(path) => self.save_file(&path, dialogs),
            None => self.save_as(dialogs),
        }
    }

    /// Ask for a path and save there. Returns false if cancelled or failed.
    pub fn save_as(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        let suggested = self
            .document
            .path()
            .and_then(file_helper::get_file_name)
            .unwrap_or_default();
        match dialogs.pick_save_file(&suggested) {
            Some(path) if !path.as_os_str().is_empty() => self.save_file(&path, dialogs),
            _ => {
                log::debug!("Save As cancelled");
                false
            }
        }
    }

    fn save_file(&mut self, path: &Path, dialogs: &mut dyn Dialogs) -> bool {
        match file_helper::write_text(path, self.document.text()) {
            Ok(()) => {
                log::info!("Saved {} ({} bytes)", path.display(), self.document.text().len());
                self.document.mark_saved(path.to_path_buf());
                self.status.show_message("File saved", Instant::now());
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                dialogs.notify_error(&e.to_string());
                false
            }
        }
    }

    /// Whether a window close request may go ahead.
    pub fn request_close(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        self.maybe_save(dialogs)
    }

    pub fn about(&self, dialogs: &mut dyn Dialogs) {
        dialogs.show_about(ABOUT_TITLE, ABOUT_TEXT);
    }

    /// Guard before discarding the document. True means proceed.
    pub fn maybe_save(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        if !self.document.modified() {
            return true;
        }
        let choice = dialogs.confirm_discard();
        log::debug!("Unsaved changes prompt: {:?}", choice);
        match choice {
            SaveChoice::Save => self.save(dialogs),
            SaveChoice::Discard => true,
            SaveChoice::Cancel => false,
        }
    }

    /// Recompute the status bar cursor readout.
    pub fn update_cursor(&mut self, char_index: usize) {
        let pos = CursorPosition::from_char_index(self.document.text(), char_index);
        self.status.set_cursor(pos);
    }

    /// Copy the selection to the clipboard.
    pub fn copy(&self, range: &Range<usize>, clipboard: &mut dyn ClipboardAccess) -> bool {
        let text = selection::selected_text(self.document.text(), range);
        !text.is_empty() && clipboard.set_text(text)
    }

    /// Move the selection to the clipboard. Returns the new cursor index.
    ///
    /// The text is only removed once the clipboard has accepted it.
    pub fn cut(&mut self, range: &Range<usize>, clipboard: &mut dyn ClipboardAccess) -> Option<usize> {
        if !self.copy(range, clipboard) {
            return None;
        }
        let (_, cursor) = selection::cut(self.document.text_mut(), range);
        Some(cursor)
    }

    /// Replace the selection with the clipboard text. Returns the new cursor index.
    pub fn paste(&mut self, range: &Range<usize>, clipboard: &mut dyn ClipboardAccess) -> Option<usize> {
        let text = clipboard.get_text()?;
        Some(selection::paste(self.document.text_mut(), range, &text))
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(super::status::DEFAULT_MESSAGE_TIMEOUT)
    }
}
