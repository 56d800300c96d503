//! System clipboard access behind a small trait.
//!
//! On Linux the clipboard contents belong to the `arboard::Clipboard`
//! that set them, so `SystemClipboard` keeps one handle for the lifetime
//! of the window instead of opening a new one per operation.

use arboard::Clipboard;

/// Clipboard access used by the Cut/Copy/Paste commands.
pub trait ClipboardAccess {
    /// Returns true if the text was placed on the clipboard.
    fn set_text(&mut self, text: &str) -> bool;
    fn get_text(&mut self) -> Option<String>;
}

/// The system clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    fn handle(&mut self) -> Option<&mut Clipboard> {
        if self.handle.is_none() {
            match Clipboard::new() {
                Ok(clipboard) => self.handle = Some(clipboard),
                Err(e) => log::warn!("Clipboard unavailable: {}", e),
            }
        }
        self.handle.as_mut()
    }
}

impl ClipboardAccess for SystemClipboard {
    fn set_text(&mut self, text: &str) -> bool {
        let Some(clipboard) = self.handle() else {
            return false;
        };
        match clipboard.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Clipboard write failed: {}", e);
                false
            }
        }
    }

    fn get_text(&mut self) -> Option<String> {
        match self.handle()?.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("Nothing to paste: {}", e);
                None
            }
        }
    }
}
