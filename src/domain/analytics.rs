//! Journal statistics

use crate::domain::Entry;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Summary counts over the current entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub total_entries: usize,
    pub unique_tags: usize,
}

impl Analytics {
    /// Count entries and distinct tags (exact, case-sensitive comparison)
    pub fn from_entries(entries: &[Entry]) -> Self {
        let tags: HashSet<&str> = entries
            .iter()
            .flat_map(|entry| entry.tags.iter().map(String::as_str))
            .collect();

        Analytics {
            total_entries: entries.len(),
            unique_tags: tags.len(),
        }
    }
}

impl fmt::Display for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total entries: {}", self.total_entries)?;
        write!(f, "Unique tags: {}", self.unique_tags)
    }
}
