//! Core data models for the fabricator

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Format of forged commit dates handed to the VCS (`YYYY-MM-DDTHH:MM:SS`, local time)
pub const GIT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Human-readable timestamp format used in file contents and commit messages
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a calendar date in `YYYY-MM-DD` format
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(input.to_string()))
}

/// Inclusive range of calendar days
///
/// `start <= end` is not enforced: a reversed range simply contains no days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new range covering `start..=end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterates over every day of the range, in ascending order
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Iterator over the days of a [`DateRange`]
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|date| *date <= self.end)?;
        // None once we run off the end of the calendar
        self.next = current.succ_opt();
        Some(current)
    }
}

/// One synthetic unit of work: a file write and a commit with a forged timestamp
///
/// `sequence_index` is 0-based; it is shown 1-based in file contents and
/// commit messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitEvent {
    /// Calendar day the commit is dated on
    pub date: NaiveDate,

    /// Position of the event within its day
    pub sequence_index: u32,

    /// Randomly drawn time of day
    pub time: NaiveTime,
}

impl CommitEvent {
    /// Creates a new commit event
    pub fn new(date: NaiveDate, sequence_index: u32, time: NaiveTime) -> Self {
        Self {
            date,
            sequence_index,
            time,
        }
    }

    /// 1-based number of the event within its day
    pub fn number(&self) -> u32 {
        self.sequence_index + 1
    }

    /// The forged timestamp: `date` combined with `time`
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Name of the synthetic file written for this event
    ///
    /// Only unique per `(date, sequence_index)`, so reruns over the same days
    /// overwrite earlier files.
    pub fn file_name(&self) -> String {
        format!("file_{}_{}.txt", self.date.format("%Y-%m-%d"), self.sequence_index)
    }

    /// Commit message, e.g. `Random commit 1 on 2024-09-01 13:05:09`
    pub fn commit_message(&self) -> String {
        format!(
            "Random commit {} on {}",
            self.number(),
            self.timestamp().format(DISPLAY_FORMAT)
        )
    }

    /// The single line written into the synthetic file
    pub fn file_line(&self) -> String {
        format!("{}\n", self.commit_message())
    }

    /// Forged date in the format passed as `GIT_AUTHOR_DATE` / `GIT_COMMITTER_DATE`
    pub fn git_date(&self) -> String {
        self.timestamp().format(GIT_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for CommitEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} at {}",
            self.date,
            self.number(),
            self.time.format("%H:%M:%S")
        )
    }
}
