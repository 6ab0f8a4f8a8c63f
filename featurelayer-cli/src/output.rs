//! Human-readable rendering of feature payloads.

use featurelayer::model::GeoFeatures;

/// Render a one-query summary: field geometries and derived functions.
pub fn summarize(query: &str, features: &GeoFeatures) -> String {
    let mut lines = vec![format!(
        "{}: {} field(s), {} function(s)",
        query,
        features.geo_by_field.len(),
        features.functions.len()
    )];

    // Sort for stable output; the map itself has no ordering guarantee
    let mut fields: Vec<_> = features.geo_by_field.iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (name, terms) in fields {
        match (&terms.geo, &terms.geo_by_tier) {
            (Some(geo), _) => {
                lines.push(format!("  {} ({}): {}", name, terms.geo_type, geo.wkt));
            }
            (None, Some(tiers)) => {
                lines.push(format!(
                    "  {} ({}): {} tier(s)",
                    name,
                    terms.geo_type,
                    tiers.len()
                ));
            }
            (None, None) => {
                lines.push(format!("  {} ({}): no geometry", name, terms.geo_type));
            }
        }
    }

    for function in &features.functions {
        lines.push(format!(
            "  fn {} over [{}]",
            function.function,
            function.fields.join(", ")
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> GeoFeatures {
        serde_json::from_value(json!({
            "geoByField": {
                "a": {
                    "type": "point",
                    "geo": { "wkt": "POINT(0 0)", "geoJson": {} }
                },
                "b": {
                    "type": "geohash",
                    "geoByTier": {
                        "tier1": { "wkt": "POINT(1 1)", "geoJson": {} },
                        "tier2": { "wkt": "POINT(2 2)", "geoJson": {} }
                    }
                }
            },
            "functions": [
                { "function": "intersects", "fields": ["a", "b"], "geoJson": {} }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_summarize_counts_and_fields() {
        let text = summarize("q", &sample());

        assert!(text.starts_with("q: 2 field(s), 1 function(s)"));
        assert!(text.contains("a (point): POINT(0 0)"));
        assert!(text.contains("b (geohash): 2 tier(s)"));
        assert!(text.contains("fn intersects over [a, b]"));
    }

    #[test]
    fn test_summarize_empty_payload() {
        let features: GeoFeatures = serde_json::from_value(json!({})).unwrap();
        assert_eq!(summarize("q", &features), "q: 0 field(s), 0 function(s)");
    }

    #[test]
    fn test_summarize_field_without_geometry() {
        let features: GeoFeatures = serde_json::from_value(json!({
            "geoByField": { "c": { "type": "unknown" } },
            "functions": []
        }))
        .unwrap();

        let text = summarize("q", &features);
        assert!(text.contains("c (unknown): no geometry"));
    }
}
