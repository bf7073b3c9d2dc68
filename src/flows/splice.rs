//! Managed region writer - Splice the index between sentinel markers
//!
//! The target README carries a region:
//! <!-- AUTO-GENERATED-INDEX-START -->
//! ...generated index...
//! <!-- AUTO-GENERATED-INDEX-END -->
//!
//! Everything outside the region is preserved byte for byte.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::error::IndexError;

/// Start sentinel of the managed region
pub const START_MARKER: &str = "<!-- AUTO-GENERATED-INDEX-START -->";

/// End sentinel of the managed region
pub const END_MARKER: &str = "<!-- AUTO-GENERATED-INDEX-END -->";

/// Byte range covering the first start marker through the first end marker
/// that follows it (inclusive of both markers)
pub fn find_region(content: &str) -> Option<(usize, usize)> {
    let start = content.find(START_MARKER)?;
    let after_start = start + START_MARKER.len();
    let end = content[after_start..].find(END_MARKER)?;
    Some((start, after_start + end + END_MARKER.len()))
}

/// Render the managed region for the given index text
fn region(index: &str) -> String {
    format!("{START_MARKER}\n{index}\n{END_MARKER}")
}

/// Swap the given marker-inclusive byte range for a fresh region
fn replace_region(content: &str, (start, end): (usize, usize), index: &str) -> String {
    let mut output = String::with_capacity(content.len() + index.len());
    output.push_str(&content[..start]);
    output.push_str(&region(index));
    output.push_str(&content[end..]);
    output
}

/// Replace the managed region of `content` with `index`.
///
/// When no start/end pair exists, an empty pair is appended to the end of
/// the content first and the region is then located again, so a stray start
/// marker earlier in the file pairs with the appended end marker.
pub fn splice_index(content: &str, index: &str) -> String {
    if let Some(range) = find_region(content) {
        return replace_region(content, range, index);
    }

    let appended = format!("{content}\n\n{START_MARKER}\n{END_MARKER}");
    match find_region(&appended) {
        Some(range) => replace_region(&appended, range, index),
        // the appended pair always matches
        None => appended,
    }
}

/// Read the target file, treating a missing file as empty
pub fn load_target(path: &Path) -> Result<String, IndexError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(IndexError::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write the full target content back
pub fn write_target(path: &Path, content: &str) -> Result<(), IndexError> {
    fs::write(path, content).map_err(|source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Target content before and after splicing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub content: String,
    pub changed: bool,
}

/// Load the target README and splice `index` into it without writing
pub fn prepare_update(path: &Path, index: &str) -> Result<Spliced, IndexError> {
    let current = load_target(path)?;
    let content = splice_index(&current, index);
    let changed = content != current;
    Ok(Spliced { content, changed })
}

/// Splice `index` into the target README and write it back in full
pub fn update_readme(path: &Path, index: &str) -> Result<Spliced, IndexError> {
    let spliced = prepare_update(path, index)?;
    write_target(path, &spliced.content)?;
    Ok(spliced)
}
