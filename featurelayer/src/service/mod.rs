//! High-level service facade for FeatureLayer operations.
//!
//! Wires a [`crate::store::FeatureStore`] to a
//! [`crate::backend::FeatureSource`] and exposes the one asynchronous
//! action that populates the store, following the Facade pattern.
//!
//! # Example
//!
//! ```ignore
//! use featurelayer::backend::BackendConfig;
//! use featurelayer::service::FeatureLayerService;
//!
//! let config = BackendConfig::new("https://map.example.com");
//! let service = FeatureLayerService::from_config(&config)?;
//!
//! service.fetch_features_for_query("query-1").await;
//! let features = service.features_by_id("query-1");
//! ```

mod error;
mod facade;

pub use error::ServiceError;
pub use facade::FeatureLayerService;
