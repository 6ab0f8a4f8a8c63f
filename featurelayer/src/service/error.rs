//! Service error types.

use crate::backend::BackendError;
use thiserror::Error;

/// Errors that can occur while constructing the service.
///
/// The fetch action itself never returns an error; fetch outcomes are
/// recorded per key in the store instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Failed to create the backend HTTP client.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] BackendError),

    /// Invalid service configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}
