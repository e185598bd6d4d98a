//! Shared output helpers for command implementations

use serde::Serialize;

use passboard_core::error::Result;

/// Format a percentage with one decimal place
pub fn pct(v: f64) -> String {
    format!("{:.1}%", v)
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
