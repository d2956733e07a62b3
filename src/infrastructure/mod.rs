//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod root;
pub mod store;

pub use config::Config;
pub use root::resolve_root;
pub use store::{EntryStore, JsonFileStore};
