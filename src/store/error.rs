//! Reminder store errors
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the reminder store
///
/// `IndexOutOfRange` is recoverable by the caller (a corrective reply to the
/// user). `Corrupt` and `Io` are operator-level failures: the file on disk
/// needs attention, and callers are expected to log them and answer with a
/// generic failure message rather than crash.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("index {index} is out of range for {len} reminder(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("reminder file is corrupt: {0}")]
    Corrupt(String),

    #[error("reminder file I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl StoreError {
    /// Whether this error should be shown to the user as-is
    ///
    /// Corrupt/Io carry filesystem detail that belongs in the operator log,
    /// not in a chat reply.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, StoreError::IndexOutOfRange { .. })
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        let msg = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => StoreError::Io(e),
            _ => StoreError::Corrupt(msg),
        }
    }
}

impl From<tempfile::PersistError> for StoreError {
    fn from(err: tempfile::PersistError) -> Self {
        StoreError::Io(err.error)
    }
}
