//! The fabrication loop

use anyhow::{Context, Result};
use fabricator_core::{schedule, CommitEvent, DateRange};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::stats::RunStats;
use crate::vcs::{Invocation, Vcs};

/// What happened while processing one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome {
    /// Full path of the synthetic file that was written
    pub path: PathBuf,
    pub stage: Invocation,
    pub commit: Invocation,
}

impl EventOutcome {
    /// Number of invocations that did not succeed (0, 1 or 2)
    pub fn failures(&self) -> usize {
        [&self.stage, &self.commit]
            .into_iter()
            .filter(|outcome| !outcome.is_success())
            .count()
    }
}

/// Writes the synthetic file of `event` into `repo_path`, creating or truncating it
pub fn write_event_file(repo_path: &Path, event: &CommitEvent) -> Result<PathBuf> {
    let path = repo_path.join(event.file_name());
    fs::write(&path, event.file_line())
        .with_context(|| format!("Failed to write {:?}", path))?;
    Ok(path)
}

/// Fabricates commits over a date range in a working directory
pub struct Fabricator<V, R> {
    /// Working directory of the repository
    repo_path: PathBuf,

    range: DateRange,

    /// External tool recording the commits
    vcs: V,

    rng: R,
}

impl<V: Vcs, R: Rng> Fabricator<V, R> {
    /// Creates a new fabricator; nothing touches the disk until [`Fabricator::run`]
    pub fn new<P: AsRef<Path>>(repo_path: P, range: DateRange, vcs: V, rng: R) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            range,
            vcs,
            rng,
        }
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    /// Walks every day of the range and processes its events in order
    ///
    /// Invocation failures are logged and counted, never returned. A file
    /// write failure stops the run immediately; files and commits made so far
    /// are left in place.
    pub fn run(&mut self) -> Result<RunStats> {
        let started = Instant::now();
        let range = self.range;
        let mut stats = RunStats::default();

        log::info!("Fabricating commits for {} in {:?}", range, self.repo_path);

        for date in range.days() {
            let events = schedule::draw_day(&mut self.rng, date);
            log::debug!("{}: {} commit(s)", date, events.len());

            for event in &events {
                let outcome = self.process_event(event)?;
                stats.failed_invocations += outcome.failures();
                stats.events += 1;
            }
            stats.days += 1;
        }

        stats.elapsed_time = started.elapsed();
        log::info!("{}", stats);
        Ok(stats)
    }

    /// Writes the file of a single event, then stages and commits it
    pub fn process_event(&self, event: &CommitEvent) -> Result<EventOutcome> {
        let path = write_event_file(&self.repo_path, event)?;
        let git_date = event.git_date();
        log::debug!("Committing {} as {}", event.file_name(), git_date);

        let stage = self.vcs.stage(Path::new(&event.file_name()));
        if !stage.is_success() {
            log::warn!("Staging {} {}", event.file_name(), stage);
        }

        let commit = self.vcs.commit(&event.commit_message(), &git_date);
        if !commit.is_success() {
            log::warn!("Commit dated {} {}", git_date, commit);
        }

        Ok(EventOutcome { path, stage, commit })
    }
}
