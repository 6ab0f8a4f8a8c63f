//! HTTP client abstraction for testability.

use super::error::BackendError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// User-Agent string sent with every request.
const USER_AGENT: &str = concat!("featurelayer/", env!("CARGO_PKG_VERSION"));

/// Trait for asynchronous HTTP GET operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes, or an error for transport failures and
    /// non-success HTTP statuses alike.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, BackendError>> + Send;
}

/// HTTP client implementation using reqwest.
///
/// Uses non-blocking I/O with a shared connection pool, so cloning is cheap
/// and concurrent requests reuse warm connections.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new client with the default request timeout.
    pub fn new() -> Result<Self, BackendError> {
        Self::with_timeout(Duration::from_secs(super::config::DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| BackendError::HttpError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Default for AsyncReqwestClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default HTTP client")
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, BackendError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(BackendError::HttpError(format!("Request failed: {}", e)));
            }
        };

        // Check HTTP status
        if !response.status().is_success() {
            warn!(
                url = url,
                status = response.status().as_u16(),
                "HTTP error status"
            );
            return Err(BackendError::HttpError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        // Read response body
        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                warn!(url = url, error = %e, "Failed to read response body");
                Err(BackendError::HttpError(format!(
                    "Failed to read response: {}",
                    e
                )))
            }
        }
    }
}
