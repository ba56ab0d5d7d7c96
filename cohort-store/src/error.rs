//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An enrollment with this email already exists.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// No enrollment with this email.
    #[error("enrollment not found: {0}")]
    NotFound(String),

    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row could not be read back as a valid record.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
