//! `passboard export` command - the aggregate document for the web UI
//!
//! Emits the `{ leaderboard, tasks, details, task_details }` JSON document
//! the static leaderboard page consumes. Always JSON regardless of
//! `--format`; the document is the contract with the rendering layer.

use std::fs;
use std::path::Path;

use passboard_core::aggregate::Board;
use passboard_core::error::Result;

use crate::cli::Cli;

pub fn execute(cli: &Cli, board: &Board, output: Option<&Path>) -> Result<()> {
    let doc = serde_json::to_string_pretty(board)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", doc))?;
            if !cli.quiet {
                println!(
                    "Wrote {} ({} models, {} tasks)",
                    path.display(),
                    board.leaderboard.len(),
                    board.tasks.len()
                );
            }
        }
        None => println!("{}", doc),
    }

    Ok(())
}
