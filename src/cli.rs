//! CLI argument parsing for passboard
//!
//! Uses clap with global flags: --input, --config, --format, --quiet,
//! --verbose, --log-level, --log-json

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use passboard_core::format::OutputFormat;

/// Passboard - pass-rate leaderboard CLI for LLM coding benchmarks
#[derive(Parser, Debug)]
#[command(name = "passboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path or URL of the results resource (newline-delimited JSON)
    #[arg(long, short, global = true, default_value = "combined_results.jsonl")]
    pub input: String,

    /// Classification config file (TOML with a [keywords] table)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the overall summary report (default)
    Report,

    /// Print the model leaderboard, best pass@5 first
    Leaderboard,

    /// Print per-task pooled pass rates, hardest task first
    Tasks,

    /// Show every run recorded for one model
    Model {
        /// Model identifier
        id: String,
    },

    /// Show the per-model breakdown for one task
    Task {
        /// Task identifier
        name: String,
    },

    /// Write the full aggregate JSON document for the web leaderboard
    Export {
        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
