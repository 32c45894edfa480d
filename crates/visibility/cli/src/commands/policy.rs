//! `policy` command

use colored::Colorize;
use visibility_engine::{Section, VisibilityEngine};

use crate::error::CliResult;
use crate::output::{print_structured, OutputFormat};

/// Execute policy command
pub fn execute(engine: &VisibilityEngine, format: OutputFormat) -> CliResult<()> {
    let config = engine.config();

    if print_structured(&config, format)? {
        return Ok(());
    }

    println!("{}", "Default policy".bold().cyan());
    for section in Section::ALL {
        let value = if config.default_policy.get(section) {
            "visible".green()
        } else {
            "hidden".red()
        };
        println!("  {:<12} {}", section.as_str(), value);
    }
    println!();
    println!("{}", "Summary thresholds".bold().cyan());
    println!("  public       ratio >= {}", config.thresholds.public);
    println!("  organization ratio >= {}", config.thresholds.organization);
    Ok(())
}
