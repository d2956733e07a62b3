//! Interactive numbered menu

use crate::application::JournalManager;
use crate::cli::output::{format_entry_details, format_title_list};
use crate::domain::parse_tag_list;
use crate::error::Result;
use crate::infrastructure::EntryStore;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "\nJournal CLI Application\n\
    1. Create a new entry\n\
    2. View stats\n\
    3. View titles of all old entries\n\
    4. Open an old entry\n\
    5. Delete an entry\n\
    6. Exit";

/// Run the menu loop until the user picks "6" or input ends.
/// Creating and deleting entries saves the journal immediately.
pub fn run_menu<S, R, W>(
    manager: &mut JournalManager<S>,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    S: EntryStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "{}", MENU)?;
        let choice = match prompt(input, output, "Enter your choice: ")? {
            Some(choice) => choice,
            None => break,
        };
        debug!(choice = choice.trim(), "menu choice");

        match choice.trim() {
            "1" => {
                let Some(title) = prompt(input, output, "Enter the title of your entry: ")? else {
                    break;
                };
                let Some(content) = prompt(input, output, "Write your entry: ")? else {
                    break;
                };
                let Some(tags) = prompt(input, output, "Enter tags (comma-separated): ")? else {
                    break;
                };

                manager.add(&title, &content, parse_tag_list(&tags));
                manager.save()?;
                writeln!(output, "Entry added successfully.")?;
            }
            "2" => {
                writeln!(output, "Stats:\n{}", manager.analytics())?;
            }
            "3" => {
                write!(output, "{}", format_title_list(&manager.list_titles()))?;
                if manager.is_empty() {
                    writeln!(output)?;
                }
            }
            "4" => {
                let Some(id) = prompt_id(input, output, "Enter the entry ID to open: ")? else {
                    continue;
                };
                match manager.get(id) {
                    Some(record) => {
                        writeln!(output, "\nEntry Details:\n{}", format_entry_details(&record))?
                    }
                    None => writeln!(output, "Entry not found.")?,
                }
            }
            "5" => {
                let Some(id) = prompt_id(input, output, "Enter the entry ID to delete: ")? else {
                    continue;
                };
                if manager.delete(id) {
                    manager.save()?;
                    writeln!(output, "Entry deleted successfully.")?;
                } else {
                    writeln!(output, "Entry not found.")?;
                }
            }
            "6" => {
                writeln!(output, "Exiting... Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }

    // Input closed
    writeln!(output)?;
    Ok(())
}

/// Print `message` and read one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Some(trimmed.to_string()))
}

/// Read an entry ID. Prints a message and yields `None` for non-numeric input.
/// End of input also yields `None`; the next menu prompt then ends the loop.
fn prompt_id<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<u64>> {
    let Some(raw) = prompt(input, output, message)? else {
        return Ok(None);
    };

    match raw.trim().parse::<u64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(output, "Invalid entry ID.")?;
            Ok(None)
        }
    }
}
