//! Output formatting utilities

use crate::domain::{Entry, EntryRecord};

/// Format `(id, title)` pairs, one per line
pub fn format_title_list(titles: &[(u64, String)]) -> String {
    if titles.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (id, title) in titles {
        output.push_str(&format!("ID: {}, Title: {}\n", id, title));
    }
    output
}

/// Format full entries using the export layout
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    entries.iter().map(Entry::export_block).collect()
}

/// Format a single entry for display. Tags are shown as stored.
pub fn format_entry_details(record: &EntryRecord) -> String {
    format!(
        "ID: {}\nDate: {}\nTitle: {}\nContent: {}\nTags: {}",
        record.id, record.date, record.title, record.content, record.tags
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_title_list() {
        assert_eq!(format_title_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_title_list() {
        let titles = vec![(1, "Trip".to_string()), (3, "Notes".to_string())];
        assert_eq!(
            format_title_list(&titles),
            "ID: 1, Title: Trip\nID: 3, Title: Notes\n"
        );
    }

    #[test]
    fn test_format_empty_entry_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![Entry::new(
            2,
            "2025-01-17 09:30:00".to_string(),
            "Notes".to_string(),
            "Meeting recap".to_string(),
            vec!["work".to_string()],
        )];
        let output = format_entry_list(&entries);
        assert!(output.starts_with("ID: 2\nDate: 2025-01-17 09:30:00\n"));
        assert!(output.contains("Tags: work\n"));
    }

    #[test]
    fn test_format_entry_details() {
        let record = EntryRecord {
            id: 1,
            date: "2025-01-17 09:30:00".to_string(),
            title: "Trip".to_string(),
            content: "Went hiking".to_string(),
            tags: "travel,nature".to_string(),
        };
        assert_eq!(
            format_entry_details(&record),
            "ID: 1\nDate: 2025-01-17 09:30:00\nTitle: Trip\nContent: Went hiking\nTags: travel,nature"
        );
    }
}
