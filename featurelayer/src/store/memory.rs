//! Session-lifetime store of query results keyed by query string.

use crate::model::{GeoFeatures, GeoFeaturesMap};
use crate::store::state::{FetchOutcome, QueryStatus};
use crate::store::stats::StoreStats;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct StoreInner {
    /// Last successfully fetched payload per query.
    ///
    /// Only successful fetches write here; entries are overwritten,
    /// never removed.
    features: GeoFeaturesMap,
    /// Outcome of the most recent fetch attempt per query.
    outcomes: HashMap<String, FetchOutcome>,
}

/// In-memory store of geographic query results.
///
/// An explicitly owned state object: construct one per session and hand
/// clones to whoever needs read access. Cloning is cheap and every clone
/// shares the same underlying state. There is no global instance.
///
/// All mutation happens inside short lock sections that are never held
/// across await points, so the store is safe to share between concurrent
/// fetches on a cooperative scheduler.
#[derive(Debug, Clone, Default)]
pub struct FeatureStore {
    inner: Arc<Mutex<StoreInner>>,
    stats: Arc<Mutex<StoreStats>>,
}

impl FeatureStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all successfully loaded entries.
    ///
    /// Returns an immutable deep copy, not a live reference: callers cannot
    /// observe subsequent store mutations through the returned map. Keys
    /// whose most recent fetch is still loading or has failed appear only
    /// if an earlier fetch succeeded.
    pub fn features(&self) -> GeoFeaturesMap {
        let inner = self.inner.lock().unwrap();
        inner.features.clone()
    }

    /// The cached payload for a key, or `None` if never successfully fetched.
    ///
    /// `None` covers never-requested, still-loading, and failed keys alike;
    /// use [`FeatureStore::status`] to tell them apart.
    pub fn features_by_id(&self, query_id: &str) -> Option<GeoFeatures> {
        let inner = self.inner.lock().unwrap();
        let found = inner.features.get(query_id).cloned();
        drop(inner);

        if let Ok(mut stats) = self.stats.lock() {
            if found.is_some() {
                stats.record_read_hit();
            } else {
                stats.record_read_miss();
            }
        }

        found
    }

    /// Status of the most recent fetch attempt for a key.
    pub fn status(&self, query_id: &str) -> QueryStatus {
        let inner = self.inner.lock().unwrap();
        inner
            .outcomes
            .get(query_id)
            .map(FetchOutcome::status)
            .unwrap_or_default()
    }

    /// Outcome of the most recent fetch attempt for a key, or `None` if the
    /// key was never requested. A `Failed` outcome carries the reason.
    pub fn outcome(&self, query_id: &str) -> Option<FetchOutcome> {
        let inner = self.inner.lock().unwrap();
        inner.outcomes.get(query_id).cloned()
    }

    /// Check if a loaded payload exists for the key.
    pub fn contains(&self, query_id: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.features.contains_key(query_id)
    }

    /// Number of loaded entries in the store.
    pub fn len(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.features.len()
    }

    /// True if no query has been successfully fetched yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get store statistics.
    pub fn stats(&self) -> StoreStats {
        let stats = self.stats.lock().unwrap();
        stats.clone()
    }

    /// Record that a fetch has been issued for the key.
    ///
    /// Overwrites any prior outcome for the key. A previously loaded payload
    /// stays readable while the new fetch is in flight.
    ///
    /// Normally driven by the service's fetch action.
    pub fn mark_loading(&self, query: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.outcomes.insert(query.into(), FetchOutcome::Loading);
        drop(inner);

        if let Ok(mut stats) = self.stats.lock() {
            stats.record_fetch_started();
        }
    }

    /// Record a successful fetch, overwriting any prior payload for the key.
    pub fn put_loaded(&self, query: impl Into<String>, features: GeoFeatures) {
        let query = query.into();

        let mut inner = self.inner.lock().unwrap();
        inner.outcomes.insert(query.clone(), FetchOutcome::Loaded);
        inner.features.insert(query, features);
        let entry_count = inner.features.len();
        drop(inner);

        if let Ok(mut stats) = self.stats.lock() {
            stats.record_fetch_success();
            stats.update_entry_count(entry_count);
        }
    }

    /// Record a failed fetch.
    ///
    /// Only the outcome is written; a previously loaded payload for the key
    /// is left untouched, so readers keep seeing the last good value.
    pub fn put_failed(&self, query: impl Into<String>, reason: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .outcomes
            .insert(query.into(), FetchOutcome::Failed(reason.into()));
        drop(inner);

        if let Ok(mut stats) = self.stats.lock() {
            stats.record_fetch_failure();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(wkt: &str) -> GeoFeatures {
        let body = json!({
            "geoByField": {
                "a": {
                    "type": "point",
                    "geo": { "wkt": wkt, "geoJson": {} }
                }
            },
            "functions": []
        });
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = FeatureStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.features().is_empty());
    }

    #[test]
    fn test_unfetched_key_reads_as_absent() {
        let store = FeatureStore::new();

        assert_eq!(store.features_by_id("q"), None);
        assert_eq!(store.status("q"), QueryStatus::NotRequested);
        assert_eq!(store.outcome("q"), None);
        assert!(!store.contains("q"));
    }

    #[test]
    fn test_put_loaded_and_read_back() {
        let store = FeatureStore::new();
        let p = payload("POINT(0 0)");

        store.mark_loading("q");
        store.put_loaded("q", p.clone());

        assert_eq!(store.features_by_id("q"), Some(p));
        assert_eq!(store.status("q"), QueryStatus::Loaded);
        assert!(store.contains("q"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_loading_key_reads_as_absent() {
        let store = FeatureStore::new();

        store.mark_loading("q");

        assert_eq!(store.features_by_id("q"), None);
        assert_eq!(store.status("q"), QueryStatus::Loading);
        assert_eq!(store.outcome("q"), Some(FetchOutcome::Loading));
    }

    #[test]
    fn test_failed_fetch_leaves_store_unchanged() {
        let store = FeatureStore::new();

        store.mark_loading("q");
        store.put_failed("q", "HTTP 500 from http://localhost:8080/api/backend/q");

        assert_eq!(store.features_by_id("q"), None);
        assert_eq!(store.status("q"), QueryStatus::Failed);
        assert!(store.is_empty());
    }

    #[test]
    fn test_failure_reason_is_kept() {
        let store = FeatureStore::new();

        store.put_failed("q", "HTTP 500");

        assert_eq!(
            store.outcome("q"),
            Some(FetchOutcome::Failed("HTTP 500".to_string()))
        );
    }

    #[test]
    fn test_failed_refetch_keeps_last_good_payload() {
        let store = FeatureStore::new();
        let p1 = payload("POINT(0 0)");

        store.put_loaded("q", p1.clone());
        store.mark_loading("q");
        store.put_failed("q", "HTTP 500");

        // The getter still serves the last successful payload
        assert_eq!(store.features_by_id("q"), Some(p1));
        assert_eq!(store.status("q"), QueryStatus::Failed);
    }

    #[test]
    fn test_overwrite_semantics() {
        let store = FeatureStore::new();
        let p1 = payload("POINT(0 0)");
        let p2 = payload("POINT(1 1)");

        store.put_loaded("q", p1);
        store.put_loaded("q", p2.clone());

        assert_eq!(store.features_by_id("q"), Some(p2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_snapshot_reflects_successful_writes_only() {
        let store = FeatureStore::new();
        let p1 = payload("POINT(0 0)");
        let p2 = payload("POINT(1 1)");

        store.put_loaded("q1", p1.clone());
        store.put_loaded("q2", p2.clone());
        store.mark_loading("q3");
        store.put_failed("q4", "HTTP 500");

        let snapshot = store.features();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("q1"), Some(&p1));
        assert_eq!(snapshot.get("q2"), Some(&p2));
        assert!(!snapshot.contains_key("q3"));
        assert!(!snapshot.contains_key("q4"));
    }

    #[test]
    fn test_snapshot_is_a_copy_not_a_live_reference() {
        let store = FeatureStore::new();
        store.put_loaded("q1", payload("POINT(0 0)"));

        let snapshot = store.features();
        store.put_loaded("q2", payload("POINT(1 1)"));

        // The earlier snapshot does not observe the later write
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.features().len(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let store = FeatureStore::new();
        let handle = store.clone();

        store.put_loaded("q", payload("POINT(0 0)"));

        assert!(handle.contains("q"));
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn test_stats_track_fetch_lifecycle() {
        let store = FeatureStore::new();

        store.mark_loading("q1");
        store.put_loaded("q1", payload("POINT(0 0)"));
        store.mark_loading("q2");
        store.put_failed("q2", "HTTP 500");

        let stats = store.stats();
        assert_eq!(stats.fetches, 2);
        assert_eq!(stats.fetch_successes, 1);
        assert_eq!(stats.fetch_failures, 1);
        assert_eq!(stats.entry_count, 1);
    }

    #[test]
    fn test_stats_track_reads() {
        let store = FeatureStore::new();
        store.put_loaded("q", payload("POINT(0 0)"));

        store.features_by_id("q");
        store.features_by_id("q");
        store.features_by_id("missing");

        let stats = store.stats();
        assert_eq!(stats.read_hits, 2);
        assert_eq!(stats.read_misses, 1);
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FeatureStore>();
    }
}
