//! Integration tests for the interactive menu

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::jotter_in;

#[test]
fn test_menu_is_default() {
    let temp = TempDir::new().unwrap();

    jotter_in(temp.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Create a new entry"))
        .stdout(predicate::str::contains("6. Exit"))
        .stdout(predicate::str::contains("Exiting... Goodbye!"));
}

#[test]
fn test_menu_create_then_list_from_cli() {
    let temp = TempDir::new().unwrap();

    jotter_in(temp.path())
        .arg("menu")
        .write_stdin("1\nTrip\nWent hiking\ntravel,nature\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added successfully."));

    jotter_in(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Trip"))
        .stdout(predicate::str::contains("Tags: travel,nature"));
}

#[test]
fn test_menu_open_and_delete() {
    let temp = TempDir::new().unwrap();

    jotter_in(temp.path()).args(["add", "a", "alpha"]).assert().success();
    jotter_in(temp.path()).args(["add", "b", "beta"]).assert().success();

    jotter_in(temp.path())
        .write_stdin("4\n2\n5\n1\n3\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry Details:"))
        .stdout(predicate::str::contains("Content: beta"))
        .stdout(predicate::str::contains("Entry deleted successfully."))
        .stdout(predicate::str::contains("ID: 2, Title: b"))
        .stdout(predicate::str::contains("ID: 1, Title: a").not());
}

#[test]
fn test_menu_rejects_bad_input() {
    let temp = TempDir::new().unwrap();

    jotter_in(temp.path())
        .write_stdin("7\n5\nxyz\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."))
        .stdout(predicate::str::contains("Invalid entry ID."));
}

#[test]
fn test_menu_stops_at_end_of_input() {
    let temp = TempDir::new().unwrap();

    jotter_in(temp.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 0"));
}
