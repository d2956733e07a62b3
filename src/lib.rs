//! jotter - Personal journal application
//!
//! Keeps free-text entries tagged with keywords in a JSON file, with
//! commands to list, view, merge, delete and export them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::JournalError;
