//! Client error types.

use elog_core::CoreError;
use thiserror::Error;

/// Errors from the entry access layer. None of them are retried or
/// reinterpreted; they reach the caller as-is.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body.
        message: String,
    },

    /// A response or request body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Normalization or form conversion failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}
