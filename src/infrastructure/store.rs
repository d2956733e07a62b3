//! Backing store for journal entries

use crate::domain::EntryRecord;
use crate::error::{JournalError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the JSON store inside a journal root
pub const STORE_FILE_NAME: &str = "journal_entries.json";

/// Abstract storage for the full entry collection
pub trait EntryStore {
    /// Where the entries live
    fn location(&self) -> &Path;

    /// Read all records. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<EntryRecord>>>;

    /// Replace the stored records with `records`
    fn save(&self, records: &[EntryRecord]) -> Result<()>;
}

/// JSON file implementation of EntryStore
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    /// Create a store using the standard file name inside `root`
    pub fn in_dir(root: &Path) -> Self {
        JsonFileStore::new(root.join(STORE_FILE_NAME))
    }
}

impl EntryStore for JsonFileStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<Vec<EntryRecord>>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no journal file yet");
                return Ok(None);
            }
            Err(e) => return Err(JournalError::Io(e)),
        };

        let records: Vec<EntryRecord> = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), count = records.len(), "read journal file");
        Ok(Some(records))
    }

    fn save(&self, records: &[EntryRecord]) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string(records)?;
        fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), count = records.len(), "wrote journal file");
        Ok(())
    }
}
