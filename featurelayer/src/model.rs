//! Data model for geographic feature query responses.
//!
//! These are our own types, decoupled from the backend service. Only the
//! fields needed for map display are represented; unknown fields in the
//! response are ignored. The wire format is JSON with camelCase keys
//! (`geoByField`, `geoByTier`, `geoJson`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from field name to the geometry terms extracted for that field.
pub type GeoByField = HashMap<String, GeoTerms>;

/// Mapping from tier name to the geometry rendered at that tier.
pub type GeoByTier = HashMap<String, Geo>;

/// Mapping from query identifier to its feature payload.
///
/// Keys are unique and last-write-wins; no ordering is guaranteed.
pub type GeoFeaturesMap = HashMap<String, GeoFeatures>;

/// Response envelope for one geographic query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoFeatures {
    /// Geometry terms keyed by field name.
    #[serde(default)]
    pub geo_by_field: GeoByField,
    /// Derived geometry functions computed over the query's fields.
    #[serde(default)]
    pub functions: Vec<GeoFunction>,
}

/// Geometry terms for a single field.
///
/// A field carries a single geometry, a tiered geometry, or both.
/// Optional fields may be absent on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoTerms {
    /// Geometry type tag reported by the backend.
    #[serde(rename = "type")]
    pub geo_type: String,
    /// Single geometry covering every term for the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    /// Geometry broken down by granularity tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_by_tier: Option<GeoByTier>,
}

/// A geometry represented in two formats.
///
/// The backend sends the same geometry as well-known text and as a
/// GeoJSON-shaped value. No invariant ties the two together; both are
/// passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geo {
    /// Well-known-text rendering of the geometry.
    pub wkt: String,
    /// The same geometry as a GeoJSON-shaped value.
    pub geo_json: serde_json::Value,
}

/// A named derived function over query fields and its resulting geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoFunction {
    /// Name of the derived function.
    pub function: String,
    /// Field names the function was computed over.
    pub fields: Vec<String>,
    /// Resulting geometry as a GeoJSON-shaped value.
    pub geo_json: serde_json::Value,
}

/// Result-count metadata carried by paged backend listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total_count: u64,
}

impl GeoFeatures {
    /// Returns true if the payload carries no field geometry and no functions.
    pub fn is_empty(&self) -> bool {
        self.geo_by_field.is_empty() && self.functions.is_empty()
    }
}
