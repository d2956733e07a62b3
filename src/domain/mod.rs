//! Domain layer - Entries and the rules around them

pub mod analytics;
pub mod entry;

pub use analytics::Analytics;
pub use entry::{
    join_tags, parse_tag_list, split_tags, Entry, EntryRecord, DATE_FORMAT, DEFAULT_EXPORT_FILE,
};
