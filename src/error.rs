//! Error types for file operations.
//!
//! I/O failures never end the process: the editor catches them at the
//! load/save boundary and shows the message in a blocking notice.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Cannot read file {}:\n{source}.", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write file {}:\n{source}.", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EditorError>;
