//! Typed failures for vocabulary collection
//!
//! Every variant is fatal to a run. The command layer wraps these in `anyhow`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("input is not a directory: {}", .0.display())]
    InputNotDirectory(PathBuf),

    #[error("cannot list {}: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 text", .path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("{} appears to be binary (contains null bytes)", .0.display())]
    Binary(PathBuf),

    #[error("cannot write vocabulary to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl VocabError {
    /// Stable code used when the error is rendered as a result item
    pub fn code(&self) -> &'static str {
        match self {
            VocabError::InputNotFound(_) => "INPUT_NOT_FOUND",
            VocabError::InputNotDirectory(_) => "INPUT_NOT_DIRECTORY",
            VocabError::List { .. } => "LIST_FAILED",
            VocabError::NotAFile(_) => "NOT_A_FILE",
            VocabError::Read { .. } => "READ_FAILED",
            VocabError::InvalidUtf8 { .. } => "INVALID_UTF8",
            VocabError::Binary(_) => "BINARY_FILE",
            VocabError::Write { .. } => "WRITE_FAILED",
        }
    }
}
