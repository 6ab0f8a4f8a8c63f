//! Configuration for the backend feature client.

use std::time::Duration;

/// Default base URL for the map backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default HTTP timeout for feature queries, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`super::BackendClient`].
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the map backend, without a trailing slash.
    pub base_url: String,

    /// HTTP request timeout.
    pub timeout: Duration,
}

impl BackendConfig {
    /// Create a config for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
