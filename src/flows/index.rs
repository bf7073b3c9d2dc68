//! Index flow - Regenerate the README index
//!
//! Steps:
//! 1. Discover README.md files under the root
//! 2. Extract and parse each file's front matter
//! 3. Render the index table
//! 4. Splice it into the target README

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::backends::scan::discover_readmes;
use crate::core::error::IndexError;
use crate::core::model::HeaderRecord;
use crate::core::render::render_index;
use crate::flows::splice::{prepare_update, update_readme, Spliced};
use crate::frontmatter::extract::{extract_header, FrontMatter};
use crate::frontmatter::parse::parse_header;

/// Name of the README regenerated in the traversal root
pub const DEFAULT_TARGET: &str = "README.md";

/// What to do with the regenerated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write the target file back
    #[default]
    Write,
    /// Print the would-be target content to stdout
    DryRun,
    /// Fail if the target file is not already up to date
    Check,
}

/// Options for one indexing run
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Traversal root; rendered paths are relative to it
    pub root: PathBuf,

    /// README to update
    pub target: PathBuf,

    pub mode: WriteMode,
}

impl IndexOptions {
    /// Index `root` into `root/README.md`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let target = root.join(DEFAULT_TARGET);
        Self {
            root,
            target,
            mode: WriteMode::Write,
        }
    }

    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Turn discovered paths into header records.
///
/// Headerless, unreadable and empty-header files contribute nothing.
pub fn collect_records(paths: Vec<PathBuf>) -> Vec<HeaderRecord> {
    let mut records = Vec::new();

    for path in paths {
        let block = match extract_header(&path) {
            FrontMatter::Block(block) => block,
            FrontMatter::Absent => {
                debug!(path = %path.display(), "no front matter");
                continue;
            }
            FrontMatter::Unreadable(err) => {
                warn!("{err}");
                continue;
            }
        };

        let fields = parse_header(&block);
        if fields.is_empty() {
            debug!(path = %path.display(), "empty front matter");
            continue;
        }

        records.push(HeaderRecord::new(fields, path));
    }

    records
}

/// Discover, parse and render the index for `root`
pub fn build_index(root: &Path) -> String {
    let records = collect_records(discover_readmes(root));
    info!(entries = records.len(), "rendering index");
    render_index(&records, root)
}

/// Run the index flow.
///
/// Returns the spliced target content, written back unless the mode says
/// otherwise.
pub fn run_index(options: &IndexOptions) -> Result<Spliced, IndexError> {
    let index = build_index(&options.root);
    let target = options.target.as_path();

    match options.mode {
        WriteMode::Write => {
            let spliced = update_readme(target, &index)?;
            if spliced.changed {
                info!(target = %target.display(), "index updated");
            } else {
                info!(target = %target.display(), "index already up to date");
            }
            Ok(spliced)
        }
        WriteMode::DryRun => prepare_update(target, &index),
        WriteMode::Check => {
            let spliced = prepare_update(target, &index)?;
            if spliced.changed {
                return Err(IndexError::OutOfDate {
                    path: target.to_path_buf(),
                });
            }
            Ok(spliced)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::EMPTY_INDEX;
    use crate::flows::splice::{END_MARKER, START_MARKER};
    use std::fs;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_collect_skips_headerless_and_empty() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("a/README.md"), "---\ntitle: A\n---\n");
        write_file(&root.join("b/README.md"), "# no header\n");
        write_file(&root.join("c/README.md"), "---\nno colon here\n---\n");
        write_file(&root.join("d/README.md"), "---\ntitle: D\n");

        let records = collect_records(discover_readmes(root));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title(), "A");
    }

    #[test]
    fn test_build_index_empty_tree() {
        let temp = tempdir().unwrap();
        assert_eq!(build_index(temp.path()), EMPTY_INDEX);
    }

    #[test]
    fn test_build_index_row_count_matches_headers() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("x/README.md"), "---\ntitle: X\n---\n");
        write_file(&root.join("y/readme.md"), "---\ntitle: Y\n---\n");
        write_file(&root.join("z/README.md"), "plain\n");

        let index = build_index(root);
        // header + separator + two rows
        assert_eq!(index.lines().count(), 4);
    }

    #[test]
    fn test_run_index_writes_target() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("README.md"), "# Top\n");
        write_file(&root.join("docs/x/README.md"), "---\ntitle: Foo\n---\n");

        let options = IndexOptions::new(root);
        let written = run_index(&options).unwrap().content;

        assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), written);
        assert!(written.starts_with("# Top\n"));
        assert!(written.contains(START_MARKER));
        assert!(written.contains("| Foo |"));
        assert!(written.ends_with(END_MARKER));
    }

    #[test]
    fn test_run_index_twice_is_stable() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("a/README.md"), "---\ntitle: A\nauthors: Ann\n---\n");

        let options = IndexOptions::new(root);
        let first = run_index(&options).unwrap();
        let second = run_index(&options).unwrap();
        assert!(first.changed);
        assert!(!second.changed);
        assert_eq!(first.content, second.content);
    }

    #[test]
    fn test_dry_run_leaves_target_untouched() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("README.md"), "# Top\n");

        let options = IndexOptions::new(root).with_mode(WriteMode::DryRun);
        let preview = run_index(&options).unwrap();

        assert!(preview.changed);
        assert!(preview.content.contains(EMPTY_INDEX));
        assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), "# Top\n");
    }

    #[test]
    fn test_check_mode() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        write_file(&root.join("a/README.md"), "---\ntitle: A\n---\n");

        let check = IndexOptions::new(root).with_mode(WriteMode::Check);
        assert!(matches!(run_index(&check), Err(IndexError::OutOfDate { .. })));

        run_index(&IndexOptions::new(root)).unwrap();
        assert!(run_index(&check).is_ok());
    }

    #[test]
    fn test_custom_target() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        let target = root.join("INDEX.md");

        let options = IndexOptions::new(root).with_target(&target);
        run_index(&options).unwrap();

        assert!(target.exists());
        assert!(!root.join("README.md").exists());
    }
}
