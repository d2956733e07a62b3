//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(about = "Personal journal with tagged entries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal directory (default: $JOURNAL_ROOT or the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new entry
    Add {
        /// Entry title
        title: String,

        /// Entry text
        #[arg(default_value = "")]
        content: String,

        /// Comma-separated tags (e.g., work,ideas)
        #[arg(short, long, default_value = "")]
        tags: String,
    },

    /// Show the ID and title of every entry
    Titles,

    /// Show every entry in full
    List,

    /// Show one entry
    Show {
        /// Entry ID
        id: u64,
    },

    /// Delete an entry
    Delete {
        /// Entry ID
        id: u64,
    },

    /// Replace several entries with a single new one
    Merge {
        /// IDs of the entries to replace
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,

        /// Title of the merged entry
        #[arg(long)]
        title: String,

        /// Text of the merged entry
        #[arg(long, default_value = "")]
        content: String,

        /// Comma-separated tags for the merged entry
        #[arg(short, long, default_value = "")]
        tags: String,
    },

    /// Write all entries to a plain-text file
    Export {
        /// Output file (default: export_file from journal.toml)
        file: Option<PathBuf>,
    },

    /// Show entry and tag counts
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Run the interactive menu (default when no command is given)
    Menu,
}
