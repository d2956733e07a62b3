//! Journal root discovery

use crate::error::Result;
use std::path::PathBuf;

/// Environment variable that points at the journal root
pub const ROOT_ENV_VAR: &str = "JOURNAL_ROOT";

/// Resolve the journal root directory.
/// An explicit path wins, then JOURNAL_ROOT, then the current directory.
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    resolve_root_from(std::env::var(ROOT_ENV_VAR).ok())
}

fn resolve_root_from(env_value: Option<String>) -> Result<PathBuf> {
    match env_value {
        Some(value) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        _ => Ok(std::env::current_dir()?),
    }
}
