//! `summary` command

use colored::Colorize;
use visibility_engine::{Section, VisibilityEngine, VisibilityLevel};

use super::{load_profile, ViewArgs};
use crate::error::CliResult;
use crate::output::{print_structured, OutputFormat};

/// Execute summary command
pub fn execute(engine: &VisibilityEngine, args: &ViewArgs, format: OutputFormat) -> CliResult<()> {
    let profile = load_profile(&args.profile)?;
    let resolution = engine.resolve(&profile, &args.context());
    let summary = engine.summarize(&resolution.section_decisions);

    if print_structured(&summary, format)? {
        return Ok(());
    }

    let level = match summary.level {
        VisibilityLevel::Public => summary.level.as_str().green(),
        VisibilityLevel::Organization => summary.level.as_str().yellow(),
        VisibilityLevel::Private => summary.level.as_str().red(),
    };
    println!("{}: {}", "Level".bold(), level);
    println!("{}: {}", "Visible".bold(), section_names(&summary.visible_sections));
    println!("{}: {}", "Hidden".bold(), section_names(&summary.hidden_sections));
    println!("{}", summary.notice());
    Ok(())
}

fn section_names(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "-".to_string();
    }
    sections
        .iter()
        .map(Section::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
