//! File system utility functions.
//!
//! Whole-file text read and write. File handles live only for the
//! duration of each call.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{EditorError, Result};
use crate::utils::encoding;

/// Read the whole file at `path` as text.
pub fn read_text(path: &Path) -> Result<String> {
    let read_err = |source| EditorError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(read_err)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer).map_err(read_err)?;
    Ok(encoding::decode_utf8(&buffer))
}

/// Write `text` to `path`, replacing any existing content.
///
/// Failing to open the file leaves an existing file untouched.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    let write_err = |source| EditorError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)
}

/// Get the file name component of a path.
pub fn get_file_name(path: &Path) -> Option<String> {
    path.file_name().map(|s| s.to_string_lossy().into_owned())
}
