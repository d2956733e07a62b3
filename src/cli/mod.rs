//! CLI layer - Command-line interface

pub mod commands;
pub mod menu;
pub mod output;

pub use commands::{Cli, Commands};
pub use menu::run_menu;
pub use output::{format_entry_details, format_entry_list, format_title_list};
