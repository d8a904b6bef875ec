//! Run statistics

use std::time::Duration;
use crate::formatting::{format_duration, format_number};

/// Summary of a fabrication run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Calendar days walked
    pub days: usize,

    /// Synthetic events processed (one file and one commit attempt each)
    pub events: usize,

    /// Stage or commit invocations that did not succeed
    pub failed_invocations: usize,

    pub elapsed_time: Duration,
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Days: {} | Commits: {} fabricated, {} failed invocations | Time: {}",
            format_number(self.days),
            format_number(self.events),
            format_number(self.failed_invocations),
            format_duration(self.elapsed_time)
        )
    }
}
