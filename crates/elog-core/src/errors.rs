//! Error types for the elog core crate.
//!
//! Transport and configuration errors live in their own crates. A unified
//! error is deferred to `elog-cli`, where everything converges into `anyhow`.

use thiserror::Error;

/// Errors raised by pure core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A timestamp string could not be parsed as an instant.
    #[error("Invalid timestamp '{value}': {reason}")]
    Timestamp { value: String, reason: String },
}

impl CoreError {
    pub(crate) fn timestamp(value: &str, reason: impl ToString) -> Self {
        Self::Timestamp {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
