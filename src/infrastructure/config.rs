//! Configuration management

use crate::domain::DEFAULT_EXPORT_FILE;
use crate::error::{JournalError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File name of the config inside a journal root
pub const CONFIG_FILE_NAME: &str = "journal.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Export target used when `export` is given no path
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export_file: default_export_file(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from journal.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE_NAME);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(JournalError::Io(e)),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Load config, writing the defaults first if journal.toml is missing.
    /// This pins `created` to the first time the journal is touched.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.join(CONFIG_FILE_NAME).exists() {
            return Config::load_from_dir(path);
        }

        let config = Config::default();
        config.save_to_dir(path)?;
        debug!(path = %path.display(), "wrote default config");
        Ok(config)
    }

    /// Save config to journal.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE_NAME), contents)?;

        Ok(())
    }
}
