//! Feature source trait and the HTTP backend implementation.

use super::config::BackendConfig;
use super::error::BackendError;
use super::http::{AsyncHttpClient, AsyncReqwestClient};
use crate::model::GeoFeatures;
use std::future::Future;
use tracing::debug;

/// Trait for resolving a query identifier to its feature payload.
///
/// This is the seam the store and service depend on; implementations may
/// fetch over HTTP, serve fixtures in tests, or wrap another transport.
pub trait FeatureSource: Send + Sync {
    /// Fetches the feature payload for the given query identifier.
    fn fetch_features(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<GeoFeatures, BackendError>> + Send;
}

/// Feature client for the map backend's HTTP API.
///
/// Requests `GET {base_url}/api/backend/{query}` and decodes the JSON body
/// into [`GeoFeatures`].
pub struct BackendClient<C: AsyncHttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: AsyncHttpClient> BackendClient<C> {
    /// Creates a new client against the default base URL.
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, super::config::DEFAULT_BASE_URL.to_string())
    }

    /// Creates a new client with a custom base URL.
    ///
    /// The base URL must not end with a slash.
    pub fn with_base_url(http_client: C, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Constructs the request URL for a query.
    ///
    /// The query string is interpolated into the path as-is, without
    /// percent-encoding, matching the backend's routing contract.
    fn build_url(&self, query: &str) -> String {
        format!("{}/api/backend/{}", self.base_url, query)
    }
}

impl BackendClient<AsyncReqwestClient> {
    /// Creates a production client from a [`BackendConfig`].
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        let http_client = AsyncReqwestClient::with_timeout(config.timeout)?;
        Ok(Self::with_base_url(http_client, config.base_url.clone()))
    }
}

impl<C: AsyncHttpClient> FeatureSource for BackendClient<C> {
    async fn fetch_features(&self, query: &str) -> Result<GeoFeatures, BackendError> {
        let url = self.build_url(query);
        let bytes = self.http_client.get(&url).await?;

        let features: GeoFeatures = serde_json::from_slice(&bytes)
            .map_err(|e| BackendError::JsonError(e.to_string()))?;

        debug!(
            query = query,
            fields = features.geo_by_field.len(),
            functions = features.functions.len(),
            "Feature payload decoded"
        );

        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::super::http::tests::MockHttpClient;
    use super::*;
    use serde_json::json;

    fn sample_body() -> Vec<u8> {
        json!({
            "geoByField": {
                "a": {
                    "type": "point",
                    "geo": { "wkt": "POINT(0 0)", "geoJson": {} }
                }
            },
            "functions": []
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn test_build_url() {
        let client = BackendClient::with_base_url(
            MockHttpClient {
                response: Ok(vec![]),
            },
            "https://map.example.com".to_string(),
        );

        assert_eq!(
            client.build_url("query-1"),
            "https://map.example.com/api/backend/query-1"
        );
    }

    #[test]
    fn test_build_url_passes_query_through_unencoded() {
        let client = BackendClient::new(MockHttpClient {
            response: Ok(vec![]),
        });

        // The query is used verbatim as a path segment
        assert_eq!(
            client.build_url("a b/c"),
            "http://localhost:8080/api/backend/a b/c"
        );
    }

    #[tokio::test]
    async fn test_fetch_features_decodes_payload() {
        let client = BackendClient::new(MockHttpClient {
            response: Ok(sample_body()),
        });

        let features = client.fetch_features("query-1").await.unwrap();

        assert_eq!(features.geo_by_field.len(), 1);
        assert_eq!(
            features.geo_by_field["a"].geo.as_ref().unwrap().wkt,
            "POINT(0 0)"
        );
    }

    #[tokio::test]
    async fn test_fetch_features_propagates_http_error() {
        let client = BackendClient::new(MockHttpClient {
            response: Err(BackendError::HttpError("HTTP 500".to_string())),
        });

        let result = client.fetch_features("bad").await;
        assert_eq!(result, Err(BackendError::HttpError("HTTP 500".to_string())));
    }

    #[tokio::test]
    async fn test_fetch_features_reports_decode_failure() {
        let client = BackendClient::new(MockHttpClient {
            response: Ok(b"not json".to_vec()),
        });

        let result = client.fetch_features("query-1").await;
        assert!(matches!(result, Err(BackendError::JsonError(_))));
    }

    #[test]
    fn test_from_config_uses_configured_base_url() {
        let config = BackendConfig::new("https://map.example.com");
        let client = BackendClient::from_config(&config).unwrap();

        assert_eq!(
            client.build_url("q"),
            "https://map.example.com/api/backend/q"
        );
    }
}
