//! Backend feature client.
//!
//! The [`FeatureSource`] trait abstracts over transports that can resolve a
//! query identifier to a [`crate::model::GeoFeatures`] payload. The
//! [`BackendClient`] implementation fetches features from the map backend's
//! HTTP API via `reqwest`, generic over an [`AsyncHttpClient`] so tests can
//! inject mock transports.

mod client;
mod config;
mod error;
mod http;

pub use client::{BackendClient, FeatureSource};
pub use config::{BackendConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::BackendError;
pub use http::{AsyncHttpClient, AsyncReqwestClient};
