//! Random draws deciding when synthetic commits happen

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;
use std::ops::RangeInclusive;

use crate::models::{CommitEvent, DateRange};

/// Number of commits drawn for each day
pub const COMMITS_PER_DAY: RangeInclusive<u32> = 1..=5;

/// Draws how many commits a day gets, uniformly from [`COMMITS_PER_DAY`]
pub fn draw_commit_count<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(COMMITS_PER_DAY)
}

/// Draws a time of day with hour, minute and second each uniform and independent
pub fn draw_time_of_day<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    let hour: i64 = rng.gen_range(0..24);
    let minute: i64 = rng.gen_range(0..60);
    let second: i64 = rng.gen_range(0..60);

    NaiveTime::default() + Duration::seconds(hour * 3600 + minute * 60 + second)
}

/// Draws the events of a single day, in sequence order
///
/// Times are not sorted: a later sequence index may carry an earlier time.
pub fn draw_day<R: Rng + ?Sized>(rng: &mut R, date: NaiveDate) -> Vec<CommitEvent> {
    let count = draw_commit_count(rng);
    (0..count)
        .map(|sequence_index| CommitEvent::new(date, sequence_index, draw_time_of_day(rng)))
        .collect()
}

/// Draws every event of a range up front
///
/// Consumes the generator in exactly the same order as a fabricator run over
/// the same range, so a seeded plan previews the run.
pub fn plan<R: Rng + ?Sized>(rng: &mut R, range: &DateRange) -> Vec<CommitEvent> {
    range.days().flat_map(|date| draw_day(rng, date)).collect()
}
