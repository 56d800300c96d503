//! Cursor position readout for the status bar.

/// 1-based line and column of the text cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl CursorPosition {
    /// Compute the position of a character index inside `text`.
    ///
    /// Indices past the end clamp to the end of the text.
    pub fn from_char_index(text: &str, index: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for ch in text.chars().take(index) {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }

    pub fn status_text(&self) -> String {
        format!("Ln {}, Col {}", self.line, self.column)
    }
}
