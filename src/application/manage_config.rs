//! Config management use case

use crate::error::{JournalError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for managing journal configuration
pub struct ConfigService {
    root: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the journal at `root`
    pub fn new(root: PathBuf) -> Self {
        ConfigService { root }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_or_init(&self.root)?;

        match key {
            "export_file" => Ok(config.export_file),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JournalError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: export_file, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_or_init(&self.root)?;

        match key {
            "export_file" => {
                if value.trim().is_empty() {
                    return Err(JournalError::Config(
                        "export_file cannot be empty".to_string(),
                    ));
                }
                config.export_file = value.to_string();
            }
            "created" => {
                return Err(JournalError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JournalError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: export_file",
                    key
                )));
            }
        }

        config.save_to_dir(&self.root)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_or_init(&self.root)
    }
}
