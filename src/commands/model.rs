//! `passboard model` command - full run listing for one model
//!
//! Rows are sorted by task name, then 1-based run index. Failure messages
//! ride along so a script can pull out why a run failed without opening the
//! raw results file.

use serde_json::json;

use passboard_core::aggregate::Board;
use passboard_core::error::{BoardError, Result};
use passboard_core::format::OutputFormat;

use crate::cli::Cli;
use crate::commands::helpers::print_json;

pub fn execute(cli: &Cli, board: &Board, id: &str) -> Result<()> {
    let rows = board
        .details
        .get(id)
        .ok_or_else(|| BoardError::ModelNotFound { id: id.to_string() })?;

    match cli.format {
        OutputFormat::Json => print_json(&json!({ "model": id, "runs": rows })),
        OutputFormat::Human => {
            println!("Runs for {} ({} total):", id, rows.len());
            println!();
            println!("{:<40} {:>4} {:<8} Message", "Task", "Run", "Result");
            for row in rows {
                println!(
                    "{:<40} {:>4} {:<8} {}",
                    row.task,
                    row.run,
                    row.result.to_string(),
                    row.message.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }
    }
}
