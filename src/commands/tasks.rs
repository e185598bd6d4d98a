//! `passboard tasks` command - per-task pooled pass rates, hardest first

use serde_json::json;

use passboard_core::aggregate::Board;
use passboard_core::error::Result;
use passboard_core::format::OutputFormat;

use crate::cli::Cli;
use crate::commands::helpers::{pct, print_json};

pub fn execute(cli: &Cli, board: &Board) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(&json!({ "tasks": board.tasks })),
        OutputFormat::Human => {
            print_table(board, None);
            Ok(())
        }
    }
}

pub fn print_table(board: &Board, limit: Option<usize>) {
    println!("{:<40} {:>7} {:>6}", "Task", "p@1", "runs");
    let shown = limit.unwrap_or(board.tasks.len());
    for summary in board.tasks.iter().take(shown) {
        println!(
            "{:<40} {:>7} {:>6}",
            summary.name,
            pct(summary.p1),
            summary.count
        );
    }
    if board.tasks.len() > shown {
        println!("... {} more", board.tasks.len() - shown);
    }
}
