//! Fabricator Git - Commit fabrication engine
//!
//! This crate is responsible for:
//! - Walking a date range day by day and drawing the commits for each day
//! - Writing one synthetic file per commit into the working directory
//! - Staging and committing each file through the external `git` CLI
//!   with forged author and committer dates

mod fabricator;
mod formatting;
mod stats;
pub mod vcs;

pub use fabricator::{write_event_file, EventOutcome, Fabricator};
pub use stats::RunStats;
pub use vcs::{GitCli, Invocation, Vcs};
