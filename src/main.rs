use clap::Parser;
use jotter::application::{ConfigService, JournalManager};
use jotter::cli::{format_entry_details, format_entry_list, format_title_list, run_menu};
use jotter::cli::{Cli, Commands};
use jotter::domain::parse_tag_list;
use jotter::error::JournalError;
use jotter::infrastructure::{resolve_root, Config, EntryStore};
use jotter::logging;
use std::io;
use std::path::Path;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JournalError> {
    let root = resolve_root(cli.dir)?;
    debug!(root = %root.display(), "journal root");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Config { key, value, list } => {
            manage_config(ConfigService::new(root), key, value, list)?;
        }
        Commands::Add {
            title,
            content,
            tags,
        } => {
            let mut manager = open_journal(&root)?;
            let id = manager.add(&title, &content, parse_tag_list(&tags));
            save_journal(&manager, &root)?;
            println!("Added entry {}", id);
        }
        Commands::Titles => {
            let manager = open_journal(&root)?;
            print!("{}", format_title_list(&manager.list_titles()));
            if manager.is_empty() {
                println!();
            }
        }
        Commands::List => {
            let manager = open_journal(&root)?;
            print!("{}", format_entry_list(manager.entries()));
            if manager.is_empty() {
                println!();
            }
        }
        Commands::Show { id } => {
            let manager = open_journal(&root)?;
            let record = manager.get(id).ok_or(JournalError::EntryNotFound(id))?;
            println!("{}", format_entry_details(&record));
        }
        Commands::Delete { id } => {
            let mut manager = open_journal(&root)?;
            if manager.delete(id) {
                save_journal(&manager, &root)?;
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with ID {}", id);
            }
        }
        Commands::Merge {
            ids,
            title,
            content,
            tags,
        } => {
            let mut manager = open_journal(&root)?;
            let id = manager.merge(&ids, &title, &content, parse_tag_list(&tags));
            save_journal(&manager, &root)?;
            println!("Merged into entry {}", id);
        }
        Commands::Export { file } => {
            let manager = open_journal(&root)?;
            let path = match file {
                Some(path) => path,
                None => root.join(Config::load_from_dir(&root)?.export_file),
            };
            export(&manager, &path)?;
        }
        Commands::Stats { json } => {
            let manager = open_journal(&root)?;
            let stats = manager.analytics();
            if json {
                println!("{}", serde_json::to_string(&stats)?);
            } else {
                println!("{}", stats);
            }
        }
        Commands::Menu => {
            let mut manager = open_journal(&root)?;
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout().lock();
            run_menu(&mut manager, &mut input, &mut output)?;
            if manager.store().location().exists() {
                Config::load_or_init(&root)?;
            }
        }
    }

    Ok(())
}

/// Build a manager for `root` and load its stored entries
fn open_journal(root: &Path) -> Result<JournalManager, JournalError> {
    let mut manager = JournalManager::open(root);
    manager.load()?;
    Ok(manager)
}

/// Persist entries and make sure journal.toml records when the journal began
fn save_journal(manager: &JournalManager, root: &Path) -> Result<(), JournalError> {
    manager.save()?;
    Config::load_or_init(root)?;
    Ok(())
}

fn export(manager: &JournalManager, path: &Path) -> Result<(), JournalError> {
    manager.export(path)?;
    println!("Exported {} entries to {}", manager.len(), path.display());
    Ok(())
}

fn manage_config(
    service: ConfigService,
    key: Option<String>,
    value: Option<String>,
    list: bool,
) -> Result<(), JournalError> {
    if list {
        let config = service.list()?;
        println!("export_file = {}", config.export_file);
        println!("created = {}", config.created.to_rfc3339());
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(&k)?);
        }
    } else {
        println!("Usage: jotter config [--list | <key> [<value>]]");
        println!("Valid keys: export_file, created");
    }
    Ok(())
}
