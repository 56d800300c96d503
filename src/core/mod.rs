//! Editor core: document model, commands and file operations.

pub mod commands;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod selection;
pub mod status;
