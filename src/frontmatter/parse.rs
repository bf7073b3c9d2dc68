//! Header parsing
//!
//! Best-effort `key: value` splitting, one pair per line.

use crate::core::model::HeaderMap;

/// Parse a front matter block into a key -> value mapping.
///
/// Each line is split at its first `:` and both sides are trimmed. Lines
/// without a `:` are skipped, and later keys overwrite earlier ones.
pub fn parse_header(block: &str) -> HeaderMap {
    let mut header = HeaderMap::new();

    for line in block.lines() {
        if let Some((key, value)) = line.split_once(':') {
            header.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    header
}
