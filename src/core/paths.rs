//! Path helpers for discovery and link rendering
//!
//! Rendered paths keep the host separator; they are only made relative to
//! the traversal root.

use std::ffi::OsStr;
use std::path::{Component, Path};

/// File name (compared case-insensitively) of indexed documents
pub const README_NAME: &str = "readme.md";

/// Directory names holding version-control metadata, never descended into
pub const VCS_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// Check if a file name is `README.md` in any letter case
pub fn is_readme_name(name: &OsStr) -> bool {
    name.to_str()
        .map(|name| name.to_lowercase() == README_NAME)
        .unwrap_or(false)
}

/// Check if a path component is a version-control metadata directory
pub fn is_vcs_dir(name: &OsStr) -> bool {
    name.to_str()
        .map(|name| VCS_DIRS.contains(&name))
        .unwrap_or(false)
}

/// Make a path relative to the root, falling back to the path itself.
///
/// Leading `./` components are dropped so `./docs/README.md` renders as
/// `docs/README.md`.
pub fn relative_to(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let cleaned: std::path::PathBuf = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    cleaned.to_string_lossy().into_owned()
}

/// Containing directory of a relative path, empty for top-level files
pub fn parent_display(relative: &str) -> String {
    Path::new(relative)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}
