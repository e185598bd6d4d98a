//! Command implementations for passboard
//!
//! Every command consumes the same pipeline: load the dataset, group the
//! records, build the aggregate board, then render one view of it.

pub mod export;
pub mod helpers;
pub mod leaderboard;
pub mod model;
pub mod report;
pub mod task;
pub mod tasks;

use std::path::Path;
use std::time::Instant;

use passboard_core::aggregate::Board;
use passboard_core::config::BoardConfig;
use passboard_core::dataset;
use passboard_core::error::Result;
use passboard_core::grouping::Grouping;

use crate::cli::{Cli, Commands};

/// Default classification config file picked up from the working directory
const CONFIG_FILE: &str = "passboard.toml";

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;

    let dataset = dataset::load(&cli.input)?;
    let parsed = dataset.parsed();
    let dropped = dataset.dropped;
    tracing::debug!(elapsed = ?start.elapsed(), parsed, dropped, "load_dataset");

    let grouping = Grouping::build(dataset.records);
    let board = Board::build(&grouping, &config);
    tracing::debug!(
        elapsed = ?start.elapsed(),
        models = board.leaderboard.len(),
        tasks = board.tasks.len(),
        "aggregate"
    );

    match &cli.command {
        None | Some(Commands::Report) => report::execute(cli, &board, parsed, dropped),
        Some(Commands::Leaderboard) => leaderboard::execute(cli, &board),
        Some(Commands::Tasks) => tasks::execute(cli, &board),
        Some(Commands::Model { id }) => model::execute(cli, &board, id),
        Some(Commands::Task { name }) => task::execute(cli, &board, name),
        Some(Commands::Export { output }) => export::execute(cli, &board, output.as_deref()),
    }
}

fn load_config(cli: &Cli) -> Result<BoardConfig> {
    if let Some(path) = &cli.config {
        return BoardConfig::load(path);
    }
    let default_path = Path::new(CONFIG_FILE);
    if default_path.exists() {
        return BoardConfig::load(default_path);
    }
    Ok(BoardConfig::default())
}
