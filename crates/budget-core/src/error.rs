//! Error types for Budget core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-facing messages and exit codes. Every operation surfaces the first
//! error it hits - there is no retry or partial rollback.

use thiserror::Error;

/// Result type alias for Budget operations.
pub type Result<T> = std::result::Result<T, BudgetError>;

/// Core error type for Budget operations.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// The store file does not exist, so there is nothing to update or delete
    #[error("There are no saved entries!")]
    NoSavedEntries,

    /// Underlying file I/O error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Malformed JSON in the store file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid user input (dates, periods)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Parse(err.to_string())
    }
}
