//! Output formatting for CLI results

use colored::Colorize;
use serde_json::Value;

use nessus6::Result;

use crate::cli::OutputFormat;

pub mod json;
pub mod table;

pub use table::Column;

/// Print the array stored under `key`, one row per element
pub fn print_list(
    value: &Value,
    key: &str,
    columns: &[Column],
    format: OutputFormat,
) -> Result<()> {
    let output = match format {
        OutputFormat::Json => json::format_json(value)?,
        OutputFormat::Table => table::format_rows(table::items(value, key), columns),
    };
    println!("{}", output);
    Ok(())
}

/// Print a single resource as field/value rows
pub fn print_object(value: &Value, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Json => json::format_json(value)?,
        OutputFormat::Table => table::format_object(value),
    };
    println!("{}", output);
    Ok(())
}

/// Confirmation line for state-changing commands
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
