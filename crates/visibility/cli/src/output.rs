//! Output formatting for CLI

use clap::ValueEnum;
use serde::Serialize;

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print `value` as JSON or YAML. Returns `false` for table output, which
/// each command renders itself.
pub fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> CliResult<bool> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Table => return Ok(false),
    }
    Ok(true)
}
