//! Plan command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use fabricator_core::schedule;
use tabled::{Table, settings::{Style, Color, Modify, object::Rows}};

use crate::helpers::{make_rng, parse_range};
use crate::output::EventRow;

/// Prints the commits a run over the same range and seed would fabricate
pub fn cmd_plan(start: String, end: String, seed: Option<u64>, json: bool) -> Result<()> {
    let range = parse_range(&start, &end)?;
    let events = schedule::plan(&mut make_rng(seed), &range);

    if json {
        let out = serde_json::to_string_pretty(&events)
            .context("Failed to serialize plan")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", format!("Planned commits for {}:", range).bright_cyan().bold());

    if events.is_empty() {
        println!("  {}", "No days in range.".yellow());
        return Ok(());
    }

    let rows: Vec<EventRow> = events.iter().map(EventRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    println!("{}", table);

    println!("  {}: {}", "Days".bright_yellow(), range.days().count().to_string().bold());
    println!("  {}: {}", "Commits".bright_yellow(), events.len().to_string().bold());
    Ok(())
}
