//! Journal entry value object and its storage record

use serde::{Deserialize, Serialize};

/// Timestamp format used for entry dates
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Export target when none is given
pub const DEFAULT_EXPORT_FILE: &str = "exported_entries.txt";

/// One journal record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub date: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Flat form of an entry as stored in `journal_entries.json`.
///
/// Tags are kept as a single comma-joined string so files stay readable by
/// older versions of the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: u64,
    pub date: String,
    pub title: String,
    pub content: String,
    pub tags: String,
}

impl Entry {
    pub fn new(id: u64, date: String, title: String, content: String, tags: Vec<String>) -> Self {
        Entry {
            id,
            date,
            title,
            content,
            tags,
        }
    }

    /// Convert to the flat storage record
    pub fn to_record(&self) -> EntryRecord {
        EntryRecord {
            id: self.id,
            date: self.date.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            tags: join_tags(&self.tags),
        }
    }

    /// Rebuild an entry from its storage record
    pub fn from_record(record: EntryRecord) -> Self {
        Entry {
            id: record.id,
            date: record.date,
            title: record.title,
            content: record.content,
            tags: split_tags(&record.tags),
        }
    }

    /// Render the human-readable block used by `export` and `list`
    pub fn export_block(&self) -> String {
        format!(
            "ID: {}\nDate: {}\nTitle: {}\nContent: {}\nTags: {}\n\n",
            self.id,
            self.date,
            self.title,
            self.content,
            self.tags.join(", ")
        )
    }
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        Entry::from_record(record)
    }
}

/// Join tags for storage. Commas inside a tag are not escaped.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

/// Split a stored tag string. An empty string means no tags.
pub fn split_tags(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(',').map(str::to_string).collect()
}

/// Parse tags typed by a user: comma separated, trimmed, empties dropped.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(tags: &[&str]) -> Entry {
        Entry::new(
            1,
            "2025-01-17 09:30:00".to_string(),
            "Trip".to_string(),
            "Went hiking".to_string(),
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn test_to_record_joins_tags() {
        let record = sample(&["travel", "nature"]).to_record();
        assert_eq!(record.tags, "travel,nature");
        assert_eq!(record.id, 1);
        assert_eq!(record.date, "2025-01-17 09:30:00");
    }

    #[test]
    fn test_no_tags_stored_as_empty_string() {
        let record = sample(&[]).to_record();
        assert_eq!(record.tags, "");
        assert!(Entry::from_record(record).tags.is_empty());
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(sample(&["a", "b"]).to_record()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Trip");
        assert_eq!(json["tags"], "a,b");
    }

    #[test]
    fn test_comma_inside_tag_splits_on_reload() {
        let entry = sample(&["rock, paper", "scissors"]);
        let reloaded = Entry::from_record(entry.to_record());
        assert_eq!(reloaded.tags, vec!["rock", " paper", "scissors"]);
    }

    #[test]
    fn test_split_tags_keeps_whitespace() {
        assert_eq!(split_tags("a, b"), vec!["a", " b"]);
    }

    #[test]
    fn test_export_block_format() {
        let block = sample(&["travel", "nature"]).export_block();
        assert_eq!(
            block,
            "ID: 1\nDate: 2025-01-17 09:30:00\nTitle: Trip\nContent: Went hiking\nTags: travel, nature\n\n"
        );
    }

    #[test]
    fn test_export_block_without_tags() {
        let block = sample(&[]).export_block();
        assert!(block.ends_with("Tags: \n\n"));
    }

    #[test]
    fn test_parse_tag_list() {
        assert_eq!(parse_tag_list(" work, ideas ,,"), vec!["work", "ideas"]);
        assert!(parse_tag_list("").is_empty());
        assert!(parse_tag_list(" , ").is_empty());
    }
}
