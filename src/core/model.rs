//! Data model shared by the pipeline stages

use std::collections::HashMap;
use std::path::PathBuf;

/// Key -> value pairs parsed from one file's front matter
pub type HeaderMap = HashMap<String, String>;

/// Parsed header of a single README together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    /// Parsed front matter fields
    pub fields: HeaderMap,

    /// Path of the README as discovered under the traversal root
    pub path: PathBuf,
}

impl HeaderRecord {
    pub fn new(fields: HeaderMap, path: impl Into<PathBuf>) -> Self {
        Self {
            fields,
            path: path.into(),
        }
    }

    /// Field value, or the empty string when the key is missing
    pub fn field(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn title(&self) -> &str {
        self.field("title")
    }

    /// Key used to order rows in the index
    pub fn sort_key(&self) -> String {
        self.title().to_lowercase()
    }
}

/// One rendered row of the index table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub title: String,
    pub description: String,
    pub authors: String,

    /// Containing directory of the README, used as link text
    pub link_text: String,

    /// Path of the README relative to the traversal root, used as link target
    pub link_target: String,
}

impl IndexRow {
    /// Render the row as a Markdown table line (without trailing newline)
    pub fn to_markdown(&self) -> String {
        format!(
            "| {} | {} | {} | [{}]({}) |",
            self.title, self.description, self.authors, self.link_text, self.link_target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> HeaderRecord {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HeaderRecord::new(fields, "docs/README.md")
    }

    #[test]
    fn test_missing_field_is_empty() {
        let rec = record(&[("title", "Foo")]);
        assert_eq!(rec.field("authors"), "");
        assert_eq!(rec.title(), "Foo");
    }

    #[test]
    fn test_sort_key_is_lowercase_title() {
        assert_eq!(record(&[("title", "Zeta API")]).sort_key(), "zeta api");
        assert_eq!(record(&[("authors", "Bob")]).sort_key(), "");
    }

    #[test]
    fn test_row_to_markdown() {
        let row = IndexRow {
            title: "Foo".to_string(),
            description: "Bar".to_string(),
            authors: "Alice".to_string(),
            link_text: "docs/x".to_string(),
            link_target: "docs/x/README.md".to_string(),
        };
        assert_eq!(
            row.to_markdown(),
            "| Foo | Bar | Alice | [docs/x](docs/x/README.md) |"
        );
    }
}
