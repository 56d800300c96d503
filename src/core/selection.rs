//! Clipboard edit primitives over a char-index selection.
//!
//! Used by the Cut/Copy/Paste menu and toolbar entries. The keyboard
//! shortcuts go straight to the text widget, which does the same thing.

use std::ops::Range;

/// Normalize a selection given as (anchor, cursor) char indices.
pub fn char_range(a: usize, b: usize) -> Range<usize> {
    a.min(b)..a.max(b)
}

/// Limit a selection to a text of `len` characters.
pub fn clamp(range: Range<usize>, len: usize) -> Range<usize> {
    range.start.min(len)..range.end.min(len)
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn byte_range(text: &str, range: &Range<usize>) -> Range<usize> {
    byte_offset(text, range.start)..byte_offset(text, range.end)
}

/// The selected substring.
pub fn selected_text<'a>(text: &'a str, range: &Range<usize>) -> &'a str {
    &text[byte_range(text, range)]
}

/// Remove the selection. Returns the removed text and the new cursor index.
pub fn cut(text: &mut String, range: &Range<usize>) -> (String, usize) {
    let bytes = byte_range(text, range);
    let removed: String = text.drain(bytes).collect();
    (removed, range.start)
}

/// Replace the selection with `insert`. Returns the cursor index after it.
pub fn paste(text: &mut String, range: &Range<usize>, insert: &str) -> usize {
    let bytes = byte_range(text, range);
    text.replace_range(bytes, insert);
    range.start + insert.chars().count()
}
