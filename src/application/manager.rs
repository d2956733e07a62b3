//! Entry management use cases

use crate::domain::{Analytics, Entry, EntryRecord, DATE_FORMAT};
use crate::error::Result;
use crate::infrastructure::{EntryStore, JsonFileStore};
use chrono::Local;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Owns the in-memory entries and keeps them in sync with a store.
///
/// Mutations (`add`, `delete`, `merge`) only touch memory; callers decide
/// when to `save`.
pub struct JournalManager<S: EntryStore = JsonFileStore> {
    entries: Vec<Entry>,
    store: S,
}

impl JournalManager<JsonFileStore> {
    /// Manager backed by `journal_entries.json` inside `root`
    pub fn open(root: &Path) -> Self {
        JournalManager::new(JsonFileStore::in_dir(root))
    }
}

impl<S: EntryStore> JournalManager<S> {
    /// Create an empty manager over the given store
    pub fn new(store: S) -> Self {
        JournalManager {
            entries: Vec::new(),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry stamped with the current local time. Returns its id.
    pub fn add(&mut self, title: &str, content: &str, tags: Vec<String>) -> u64 {
        let date = Local::now().format(DATE_FORMAT).to_string();
        self.add_at(title, content, tags, date)
    }

    /// Add an entry with an explicit timestamp. Returns its id.
    ///
    /// The id is the entry count plus one. After a deletion that id may
    /// still be held by a live entry; in that case the next free id above
    /// it is taken.
    pub fn add_at(&mut self, title: &str, content: &str, tags: Vec<String>, date: String) -> u64 {
        let mut id = self.entries.len() as u64 + 1;
        if self.contains(id) {
            let candidate = id;
            while self.contains(id) {
                id += 1;
            }
            warn!(candidate, id, "entry id already in use, skipping ahead");
        }

        self.entries.push(Entry::new(
            id,
            date,
            title.to_string(),
            content.to_string(),
            tags,
        ));
        debug!(id, "added entry");
        id
    }

    /// All entries in storage form, in sequence order
    pub fn list_all(&self) -> Vec<EntryRecord> {
        self.entries.iter().map(Entry::to_record).collect()
    }

    /// `(id, title)` pairs in sequence order
    pub fn list_titles(&self) -> Vec<(u64, String)> {
        self.entries
            .iter()
            .map(|entry| (entry.id, entry.title.clone()))
            .collect()
    }

    /// Look up an entry by id
    pub fn get(&self, id: u64) -> Option<EntryRecord> {
        self.find(id).map(Entry::to_record)
    }

    /// Borrow an entry by id
    pub fn find(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        debug!(id, removed, "delete entry");
        removed
    }

    /// Replace the entries listed in `ids` with one new entry.
    ///
    /// Unknown ids are ignored. The new entry gets its id from the count
    /// left after removal and is stamped with the current time.
    pub fn merge(&mut self, ids: &[u64], title: &str, content: &str, tags: Vec<String>) -> u64 {
        let before = self.entries.len();
        self.entries.retain(|entry| !ids.contains(&entry.id));
        let removed = before - self.entries.len();

        let id = self.add(title, content, tags);
        info!(requested = ids.len(), removed, id, "merged entries");
        id
    }

    /// Entry and distinct tag counts
    pub fn analytics(&self) -> Analytics {
        Analytics::from_entries(&self.entries)
    }

    /// Write every entry as a text block to `path`, overwriting it
    pub fn export(&self, path: &Path) -> Result<()> {
        let output: String = self.entries.iter().map(Entry::export_block).collect();
        fs::write(path, output)?;
        info!(path = %path.display(), count = self.entries.len(), "exported entries");
        Ok(())
    }

    /// Persist the full collection, replacing what the store held
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.list_all())
    }

    /// Replace the in-memory entries with the stored ones.
    /// A store that does not exist yet leaves the manager empty.
    pub fn load(&mut self) -> Result<()> {
        self.entries = match self.store.load()? {
            Some(records) => records.into_iter().map(Entry::from).collect(),
            None => Vec::new(),
        };
        debug!(count = self.entries.len(), "loaded entries");
        Ok(())
    }

    fn contains(&self, id: u64) -> bool {
        self.find(id).is_some()
    }
}
