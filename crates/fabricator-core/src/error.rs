//! Error types for fabricator-core

/// Errors specific to fabricator-core
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid date: {0}. Expected YYYY-MM-DD")]
    InvalidDate(String),
}
