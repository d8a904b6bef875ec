//! Run command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use fabricator_git::{Fabricator, GitCli};
use std::path::PathBuf;

use crate::helpers::{make_rng, parse_range, resolve_repo};

/// Fabricates commits for every day of the range in the given working directory
pub fn cmd_run(
    repo: Option<PathBuf>,
    start: String,
    end: String,
    seed: Option<u64>,
    git: String,
) -> Result<()> {
    let repo_path = resolve_repo(repo)?;
    let range = parse_range(&start, &end)?;

    if let Some(seed) = seed {
        log::info!("Using seed {}", seed);
    }

    let vcs = GitCli::with_program(&git, &repo_path);
    let mut fabricator = Fabricator::new(&repo_path, range, vcs, make_rng(seed));

    let stats = fabricator.run()
        .context("Commit fabrication halted")?;

    if stats.failed_invocations > 0 {
        log::warn!(
            "{} {} invocation(s) did not succeed; see earlier warnings",
            stats.failed_invocations,
            git
        );
    }

    println!("{}", "✅ Random commits generated successfully!".green());
    Ok(())
}
