//! Error types for the backend feature client.

use thiserror::Error;

/// Errors that can occur when fetching features from the map backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// JSON deserialization of the response body failed.
    #[error("Failed to parse response: {0}")]
    JsonError(String),
}
