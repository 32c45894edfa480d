//! Profile visibility CLI
//!
//! Evaluates profile documents exported from the profile store against a
//! viewing context, without any running service:
//! - `evaluate` prints the decisions, reasons and projected profile
//! - `summary` prints the exposure level and visible/hidden sections
//! - `policy` prints the effective engine configuration

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::ViewArgs;
pub use error::{CliError, CliResult};

/// Profile visibility CLI application
#[derive(Parser)]
#[command(name = "profile-visibility")]
#[command(about = "Evaluate which profile sections a viewer may see", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table", global = true)]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Engine configuration file (JSON); standard policy when omitted
    #[arg(short, long, global = true, env = "PROFILE_VISIBILITY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Resolve and project a profile for a viewer
    Evaluate(ViewArgs),

    /// Summarize how much of a profile a viewer sees
    Summary(ViewArgs),

    /// Show the effective policy configuration
    Policy,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Logs go to stderr so structured output stays parseable.
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let engine = commands::load_engine(cli.config.as_deref())?;

    match cli.command {
        Commands::Evaluate(args) => commands::evaluate::execute(&engine, &args, cli.output),
        Commands::Summary(args) => commands::summary::execute(&engine, &args, cli.output),
        Commands::Policy => commands::policy::execute(&engine, cli.output),
    }
}
