//! `passboard task` command - per-model breakdown for one task
//!
//! The headline rate pools every run of the task across all models; the
//! breakdown then shows each model's own rate with its S/F run sequence in
//! arrival order, best model first.

use serde_json::json;

use passboard_core::aggregate::Board;
use passboard_core::error::{BoardError, Result};
use passboard_core::format::OutputFormat;

use crate::cli::Cli;
use crate::commands::helpers::{pct, print_json};

pub fn execute(cli: &Cli, board: &Board, name: &str) -> Result<()> {
    let breakdown = board
        .task_details
        .get(name)
        .ok_or_else(|| BoardError::TaskNotFound {
            name: name.to_string(),
        })?;
    let summary = board
        .tasks
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| BoardError::TaskNotFound {
            name: name.to_string(),
        })?;

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "task": name,
            "p1": summary.p1,
            "count": summary.count,
            "breakdown": breakdown,
        })),
        OutputFormat::Human => {
            println!(
                "Task {}: pooled p@1 {} over {} runs",
                name,
                pct(summary.p1),
                summary.count
            );
            println!();
            println!("{:<32} {:>7} Runs", "Model", "p@1");
            for row in breakdown {
                let cells: String = row.runs.iter().map(|c| c.val).collect();
                println!("{:<32} {:>7} {}", row.model, pct(row.p1), cells);
            }
            Ok(())
        }
    }
}
