//! The FeatureLayer service facade.

use super::error::ServiceError;
use crate::backend::{AsyncReqwestClient, BackendClient, BackendConfig, FeatureSource};
use crate::model::{GeoFeatures, GeoFeaturesMap};
use crate::store::{FeatureStore, QueryStatus, StoreStats};
use tracing::{debug, warn};

/// Facade combining a feature source with a session store.
///
/// Holds the store and the transport together so UI code has a single
/// object to fetch through and read from. The store can also be shared:
/// construct with [`FeatureLayerService::with_store`] and keep a clone of
/// the store handle for readers that should not see the source.
pub struct FeatureLayerService<S: FeatureSource> {
    source: S,
    store: FeatureStore,
}

impl FeatureLayerService<BackendClient<AsyncReqwestClient>> {
    /// Create a production service from a backend configuration.
    ///
    /// Builds the reqwest-backed client and a fresh, empty store.
    pub fn from_config(config: &BackendConfig) -> Result<Self, ServiceError> {
        if config.base_url.is_empty() {
            return Err(ServiceError::Config("base URL is empty".to_string()));
        }

        let client = BackendClient::from_config(config)?;
        Ok(Self::new(client))
    }
}

impl<S: FeatureSource> FeatureLayerService<S> {
    /// Create a service over any feature source with a fresh store.
    pub fn new(source: S) -> Self {
        Self::with_store(source, FeatureStore::new())
    }

    /// Create a service over any feature source and an existing store.
    pub fn with_store(source: S, store: FeatureStore) -> Self {
        Self { source, store }
    }

    /// Get a handle to the underlying store.
    ///
    /// The handle shares state with the service; reads through it observe
    /// every fetch the service completes.
    pub fn store(&self) -> FeatureStore {
        self.store.clone()
    }

    /// Fetch the feature payload for a query and record the outcome.
    ///
    /// Fire-and-forget population: the returned future always resolves
    /// successfully. On success the payload is written into the store under
    /// the query key, overwriting any prior value. On failure the error is
    /// logged, recorded as the key's outcome, and otherwise absorbed; a
    /// previously loaded payload for the key stays readable.
    ///
    /// Issuing a second fetch for the same key before the first resolves is
    /// allowed; the last response to arrive wins. There is no in-flight
    /// deduplication and no cancellation.
    pub async fn fetch_features_for_query(&self, query: &str) {
        self.store.mark_loading(query);

        match self.source.fetch_features(query).await {
            Ok(features) => {
                debug!(
                    query = query,
                    fields = features.geo_by_field.len(),
                    "Feature fetch succeeded"
                );
                self.store.put_loaded(query, features);
            }
            Err(e) => {
                warn!(query = query, error = %e, "Feature fetch failed");
                self.store.put_failed(query, e.to_string());
            }
        }
    }

    /// Snapshot of all successfully loaded entries.
    ///
    /// See [`FeatureStore::features`] for the copy-vs-reference contract.
    pub fn features(&self) -> GeoFeaturesMap {
        self.store.features()
    }

    /// The cached payload for a key, or `None` if never successfully fetched.
    pub fn features_by_id(&self, query_id: &str) -> Option<GeoFeatures> {
        self.store.features_by_id(query_id)
    }

    /// Status of the most recent fetch attempt for a key.
    pub fn status(&self, query_id: &str) -> QueryStatus {
        self.store.status(query_id)
    }

    /// Get store statistics.
    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }
}
