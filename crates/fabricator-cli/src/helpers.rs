//! Helper functions for CLI operations

use anyhow::{Context, Result};
use fabricator_core::{parse_date, DateRange};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Default first day of the range
pub const DEFAULT_START: &str = "2024-09-01";

/// Default last day of the range
pub const DEFAULT_END: &str = "2024-09-03";

/// Parses the `--start` / `--end` pair into a range
///
/// A start after the end is accepted and yields an empty range.
pub fn parse_range(start: &str, end: &str) -> Result<DateRange> {
    let start = parse_date(start).context("Invalid --start")?;
    let end = parse_date(end).context("Invalid --end")?;
    if start > end {
        log::warn!("Start date {} is after end date {}; nothing to do", start, end);
    }
    Ok(DateRange::new(start, end))
}

/// Seeded generator when a seed is given, entropy-seeded otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Resolves the working directory, defaulting to the process's current directory
pub fn resolve_repo(repo: Option<PathBuf>) -> Result<PathBuf> {
    match repo {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}
