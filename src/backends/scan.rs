//! README discovery backend
//!
//! Uses walkdir for a deterministic, name-sorted depth-first traversal

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::IndexError;
use crate::core::paths::{is_readme_name, is_vcs_dir};

/// Walk entries below `root` that are not version-control metadata
fn is_indexable_entry(entry: &DirEntry) -> bool {
    // Never prune the root itself, even when it is called `.git`.
    entry.depth() == 0 || !(entry.file_type().is_dir() && is_vcs_dir(entry.file_name()))
}

/// Find all README.md files under `root`.
///
/// Entries the walk cannot visit are reported to `on_error` and skipped.
pub fn discover_readmes_with<F>(root: &Path, mut on_error: F) -> Vec<PathBuf>
where
    F: FnMut(IndexError),
{
    let mut found = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(is_indexable_entry);

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                on_error(IndexError::Walk {
                    path,
                    message: err.to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_file() && is_readme_name(entry.file_name()) {
            debug!(path = %entry.path().display(), "discovered readme");
            found.push(entry.into_path());
        }
    }

    found
}

/// Find all README.md files under `root`, logging unreadable directories
pub fn discover_readmes(root: &Path) -> Vec<PathBuf> {
    discover_readmes_with(root, |err| warn!("{err}, skipping"))
}
