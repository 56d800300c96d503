//! Status bar state: a transient message plus the persistent cursor readout.

use std::time::{Duration, Instant};

use super::cursor::CursorPosition;

/// Default lifetime of a transient status message.
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    expires_at: Option<Instant>,
}

/// Status bar contents.
#[derive(Debug, Clone)]
pub struct StatusBar {
    message: Option<StatusMessage>,
    cursor: CursorPosition,
    timeout: Duration,
}

impl StatusBar {
    pub fn new(timeout: Duration) -> Self {
        Self {
            message: Some(StatusMessage {
                text: "Ready".to_string(),
                expires_at: None,
            }),
            cursor: CursorPosition::default(),
            timeout,
        }
    }

    /// Show a message that clears itself after the configured timeout.
    pub fn show_message(&mut self, text: &str, now: Instant) {
        self.message = Some(StatusMessage {
            text: text.to_string(),
            expires_at: Some(now + self.timeout),
        });
    }

    /// The message to display at `now`, dropping it once it has expired.
    pub fn current_message(&mut self, now: Instant) -> Option<&str> {
        let expired = matches!(
            &self.message,
            Some(StatusMessage { expires_at: Some(at), .. }) if now >= *at
        );
        if expired {
            self.message = None;
        }
        self.message.as_ref().map(|m| m.text.as_str())
    }

    /// When the current transient message expires, if there is one.
    pub fn expires_at(&self) -> Option<Instant> {
        self.message.as_ref().and_then(|m| m.expires_at)
    }

    pub fn set_cursor(&mut self, cursor: CursorPosition) {
        self.cursor = cursor;
    }

    /// The persistent `Ln x, Col y` label.
    pub fn cursor_label(&self) -> String {
        self.cursor.status_text()
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_TIMEOUT)
    }
}
