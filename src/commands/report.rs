//! `passboard report` command - overall summary
//!
//! The default view: headline statistics, the leaderboard and the hardest
//! tasks in one pass, patterned after a benchmark run report.

use chrono::Utc;
use serde_json::json;

use passboard_core::aggregate::Board;
use passboard_core::error::Result;
use passboard_core::format::OutputFormat;

use crate::cli::Cli;
use crate::commands::helpers::{pct, print_json};
use crate::commands::{leaderboard, tasks};

/// Hardest tasks shown in the human summary
const TASK_PREVIEW: usize = 10;

pub fn execute(cli: &Cli, board: &Board, parsed: usize, dropped: usize) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "runs": parsed,
            "dropped_lines": dropped,
            "models": board.leaderboard.len(),
            "tasks": board.tasks.len(),
            "overall_pass_rate": board.overall_pass_rate(),
            "leaderboard": board.leaderboard,
            "hardest_tasks": board.tasks.iter().take(TASK_PREVIEW).collect::<Vec<_>>(),
        })),
        OutputFormat::Human => {
            print_human(cli, board, parsed, dropped);
            Ok(())
        }
    }
}

fn print_human(cli: &Cli, board: &Board, parsed: usize, dropped: usize) {
    println!("# Benchmark Summary");
    println!();
    if !cli.quiet {
        println!("Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S"));
    }
    println!(
        "Total runs: {} ({} models, {} tasks)",
        parsed,
        board.leaderboard.len(),
        board.tasks.len()
    );
    if dropped > 0 {
        println!("Dropped lines: {}", dropped);
    }
    println!("Overall pass rate: {}", pct(board.overall_pass_rate()));
    println!();

    println!("## Leaderboard");
    println!();
    leaderboard::print_table(board);
    println!();

    println!("## Hardest tasks");
    println!();
    tasks::print_table(board, Some(TASK_PREVIEW));
}
