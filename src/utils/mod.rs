//! Utility modules for file I/O, text decoding and clipboard access.

pub mod clipboard;
pub mod encoding;
pub mod file_helper;
