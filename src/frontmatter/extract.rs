//! Front matter extraction
//!
//! A header block starts on the very first line of a file:
//! ---
//! key: value
//! ---

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::core::error::IndexError;

/// Static regex matching a leading `---` delimited block.
/// Both delimiter lines must consist solely of `---` (optionally CRLF).
pub static FRONT_MATTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---\r?\n(?:(.*?)\r?\n)??---(?:\r?\n|\r?\z)")
        .expect("Invalid FRONT_MATTER_RE regex")
});

/// Outcome of looking for front matter in one file
#[derive(Debug)]
pub enum FrontMatter {
    /// Text strictly between the delimiter lines (possibly empty)
    Block(String),

    /// The file has no delimited block at its start
    Absent,

    /// The file could not be read; treated as headerless
    Unreadable(IndexError),
}

/// Extract the front matter block from file content
pub fn extract_block(content: &str) -> Option<&str> {
    FRONT_MATTER_RE
        .captures(content)
        .map(|caps| caps.get(1).map(|m| m.as_str()).unwrap_or(""))
}

/// Read a file and extract its front matter block
pub fn extract_header(path: &Path) -> FrontMatter {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(source) => {
            return FrontMatter::Unreadable(IndexError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match extract_block(&content) {
        Some(block) => FrontMatter::Block(block.to_string()),
        None => FrontMatter::Absent,
    }
}
