//! Scripted stand-ins for the native dialogs and the system clipboard.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::core::editor::{Dialogs, SaveChoice};
use crate::utils::clipboard::ClipboardAccess;

/// Scripted dialog answers plus a record of what was shown.
///
/// An unscripted prompt answers Cancel.
#[derive(Default)]
pub struct FakeDialogs {
    pub open_picks: VecDeque<Option<PathBuf>>,
    pub save_picks: VecDeque<Option<PathBuf>>,
    pub choices: VecDeque<SaveChoice>,
    pub prompts: usize,
    pub errors: Vec<String>,
    pub abouts: usize,
}

impl Dialogs for FakeDialogs {
    fn pick_open_file(&mut self) -> Option<PathBuf> {
        self.open_picks.pop_front().flatten()
    }

    fn pick_save_file(&mut self, _suggested_name: &str) -> Option<PathBuf> {
        self.save_picks.pop_front().flatten()
    }

    fn confirm_discard(&mut self) -> SaveChoice {
        self.prompts += 1;
        self.choices.pop_front().unwrap_or(SaveChoice::Cancel)
    }

    fn notify_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn show_about(&mut self, _title: &str, _text: &str) {
        self.abouts += 1;
    }
}

/// In-memory clipboard. `broken` makes every write fail.
#[derive(Default)]
pub struct FakeClipboard {
    pub text: Option<String>,
    pub broken: bool,
}

impl ClipboardAccess for FakeClipboard {
    fn set_text(&mut self, text: &str) -> bool {
        if self.broken {
            return false;
        }
        self.text = Some(text.to_string());
        true
    }

    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }
}
