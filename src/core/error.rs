//! Error types for the indexing pipeline
//!
//! Stage functions return [`IndexError`]; the command layer wraps it with
//! `anyhow` context before deciding whether the run can continue.

use std::path::PathBuf;

/// Errors raised while discovering, reading or writing README files
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// A discovered README could not be read (permissions, invalid UTF-8).
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The target README could not be read back or written.
    #[error("failed to update {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The directory walk hit an entry it could not visit.
    #[error("failed to walk {path:?}: {message}")]
    Walk { path: PathBuf, message: String },

    /// `--check` found the managed region differs from what would be written.
    #[error("index in {path:?} is out of date")]
    OutOfDate { path: PathBuf },
}
