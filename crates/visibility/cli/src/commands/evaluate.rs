//! `evaluate` command

use colored::Colorize;
use visibility_engine::VisibilityEngine;

use super::{load_profile, ViewArgs};
use crate::error::CliResult;
use crate::output::{print_structured, OutputFormat};

/// Execute evaluate command
pub fn execute(engine: &VisibilityEngine, args: &ViewArgs, format: OutputFormat) -> CliResult<()> {
    let profile = load_profile(&args.profile)?;
    let result = engine.evaluate(&profile, &args.context());

    if print_structured(&result, format)? {
        return Ok(());
    }

    println!("{}", format!("Profile: {}", profile.core.name).bold().cyan());
    println!("{}", "=".repeat(60));
    for (section, visible) in result.section_decisions.iter() {
        let mark = if visible {
            format!("{:<8}", "visible").green()
        } else {
            format!("{:<8}", "hidden").red()
        };
        let reason = result.reasons.get(&section).map(String::as_str).unwrap_or("");
        println!("  {:<12} {} {}", section.as_str(), mark, reason.dimmed());
    }
    println!();
    println!("{}", "Projected profile".bold());
    println!("{}", serde_json::to_string_pretty(&result.projected_profile)?);
    Ok(())
}
