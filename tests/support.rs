use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for passboard
pub fn passboard() -> Command {
    cargo_bin_cmd!("passboard")
}
