//! FeatureLayer - Geographic query features for map visualization
//!
//! This library fetches geographic feature payloads for query identifiers
//! from a map backend and caches them in memory for the lifetime of the
//! owning session.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use featurelayer::backend::BackendConfig;
//! use featurelayer::service::FeatureLayerService;
//!
//! let config = BackendConfig::new("https://map.example.com");
//! let service = FeatureLayerService::from_config(&config)?;
//!
//! // Fire-and-forget fetch; the outcome is recorded in the store.
//! service.fetch_features_for_query("query-1").await;
//!
//! if let Some(features) = service.features_by_id("query-1") {
//!     // Render the features
//! }
//! ```

pub mod backend;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

/// Version of the FeatureLayer library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
