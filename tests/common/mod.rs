use assert_cmd::Command;
use std::path::Path;

pub fn jotter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jotter").unwrap();
    cmd.env_remove("JOURNAL_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command already pointed at a journal directory
#[allow(dead_code)]
pub fn jotter_in(dir: &Path) -> Command {
    let mut cmd = jotter_cmd();
    cmd.arg("--dir").arg(dir);
    cmd
}
