//! Error types for jotter

use thiserror::Error;

/// Main error type for jotter
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed journal file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(u64),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::Parse(_) => 3,
            JournalError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::EntryNotFound(id) => {
                format!(
                    "Entry not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'jotter titles' to see existing entry IDs\n\
                    • IDs can change after deletions and merges",
                    id
                )
            }
            JournalError::Parse(e) => {
                format!(
                    "Malformed journal file: {}\n\n\
                    Suggestions:\n\
                    • Check journal_entries.json for hand edits or truncation\n\
                    • Restore the file from a backup or move it aside to start fresh",
                    e
                )
            }
            JournalError::TomlDeserialize(e) => {
                format!(
                    "TOML deserialization error: {}\n\n\
                    Suggestions:\n\
                    • Fix the syntax in journal.toml\n\
                    • Delete journal.toml to fall back to the defaults",
                    e
                )
            }
            JournalError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: jotter config export_file notes.txt",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
