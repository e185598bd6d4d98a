//! `passboard leaderboard` command - the model leaderboard

use serde_json::json;

use passboard_core::aggregate::Board;
use passboard_core::error::Result;
use passboard_core::format::OutputFormat;

use crate::cli::Cli;
use crate::commands::helpers::{pct, print_json};

pub fn execute(cli: &Cli, board: &Board) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(&json!({ "leaderboard": board.leaderboard })),
        OutputFormat::Human => {
            print_table(board);
            Ok(())
        }
    }
}

pub fn print_table(board: &Board) {
    println!(
        "{:<32} {:<14} {:>7} {:>7} {:>9} {:>6} {:>6}",
        "Model", "Type", "p@1", "p@5", "pass-all", "runs", "tasks"
    );
    for summary in &board.leaderboard {
        println!(
            "{:<32} {:<14} {:>7} {:>7} {:>9} {:>6} {:>6}",
            summary.id,
            summary.kind,
            pct(summary.p1),
            pct(summary.p5),
            pct(summary.p_all),
            summary.runs,
            summary.tasks
        );
    }
}
