//! Output formatting structures for CLI display

use fabricator_core::CommitEvent;
use tabled::Tabled;

/// Table row for displaying planned commits
#[derive(Tabled)]
pub struct EventRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "#")]
    pub number: u32,
    #[tabled(rename = "Time")]
    pub time: String,
    #[tabled(rename = "File")]
    pub file: String,
}

impl From<&CommitEvent> for EventRow {
    fn from(event: &CommitEvent) -> Self {
        Self {
            date: event.date.to_string(),
            number: event.number(),
            time: event.time.format("%H:%M:%S").to_string(),
            file: event.file_name(),
        }
    }
}
