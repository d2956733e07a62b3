//! Application layer - Use cases and orchestration

pub mod manage_config;
pub mod manager;

pub use manage_config::ConfigService;
pub use manager::JournalManager;
