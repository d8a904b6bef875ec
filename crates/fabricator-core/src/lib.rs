//! Fabricator Core - Shared data models and schedule drawing
//!
//! This crate defines the date range and commit event types used throughout
//! the project, and the random draws that decide how many commits land on
//! each day and at what time.

mod models;
mod error;
pub mod schedule;

pub use models::{parse_date, CommitEvent, DateRange, Days, DISPLAY_FORMAT, GIT_DATE_FORMAT};
pub use error::CoreError;
