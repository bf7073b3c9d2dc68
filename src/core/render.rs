//! Index renderer
//!
//! Turns parsed header records into the Markdown table placed between the
//! sentinel markers.

use std::path::Path;

use crate::core::model::{HeaderRecord, IndexRow};
use crate::core::paths::{parent_display, relative_to};

/// Text emitted instead of a table when nothing was indexed
pub const EMPTY_INDEX: &str = "No README files with headers found.";

const TABLE_HEADER: &str = "| Title | Description | Authors | Path |\n";
const TABLE_SEPARATOR: &str = "|--------|-------------|---------|------|\n";

/// Build table rows ordered by lowercase title.
///
/// The sort is stable, so equal titles keep discovery order.
pub fn build_rows(records: &[HeaderRecord], root: &Path) -> Vec<IndexRow> {
    let mut sorted: Vec<&HeaderRecord> = records.iter().collect();
    sorted.sort_by_cached_key(|record| record.sort_key());

    sorted
        .into_iter()
        .map(|record| {
            let link_target = relative_to(&record.path, root);
            IndexRow {
                title: record.field("title").to_string(),
                description: record.field("description").to_string(),
                authors: record.field("authors").to_string(),
                link_text: parent_display(&link_target),
                link_target,
            }
        })
        .collect()
}

/// Render the index table for the given records
pub fn render_index(records: &[HeaderRecord], root: &Path) -> String {
    if records.is_empty() {
        return EMPTY_INDEX.to_string();
    }

    let mut table = String::from(TABLE_HEADER);
    table.push_str(TABLE_SEPARATOR);

    for row in build_rows(records, root) {
        table.push_str(&row.to_markdown());
        table.push('\n');
    }

    table
}
