//! Extracts [`BoundaryFeature`]s from a `GeoJSON`-style feature collection.
//!
//! Boundary files from different publishers name the district property
//! differently (`ADM2_EN`, `NAME_2`, `shapeName`, `district`, ...). The
//! display name is found by probing a fixed list of keys first, then by
//! falling back to any property whose key looks district-like, then
//! name-like.

use std::sync::LazyLock;

use mob_map_district_models::{BoundaryFeature, UNKNOWN_DISTRICT};
use regex::Regex;
use serde_json::{Map, Value};

use crate::DistrictError;
use crate::canonical::canonical_key;

/// Property keys tried first, in priority order.
pub const NAME_PROPERTY_KEYS: &[&str] = &[
    "ADM2_EN",
    "ADM2_NAME",
    "district",
    "District",
    "DISTRICT",
    "NAME_2",
    "shapeName",
    "name",
    "NAME",
];

static DISTRICT_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)district").expect("valid regex"));

static NAME_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)name").expect("valid regex"));

/// Parses boundary JSON text into features.
///
/// # Errors
///
/// Returns [`DistrictError`] if the text is not JSON or has no `features`
/// array.
pub fn parse_boundaries(text: &str) -> Result<Vec<BoundaryFeature>, DistrictError> {
    let json: Value = serde_json::from_str(text)?;
    parse_feature_collection(&json)
}

/// Converts a parsed feature collection into boundary features.
///
/// Features whose geometry type does not contain `polygon`
/// (case-insensitive) are skipped. Features without a resolvable name are
/// kept as [`UNKNOWN_DISTRICT`] with an empty key.
///
/// # Errors
///
/// Returns [`DistrictError::Conversion`] if there is no `features` array.
pub fn parse_feature_collection(json: &Value) -> Result<Vec<BoundaryFeature>, DistrictError> {
    let features = json["features"]
        .as_array()
        .ok_or_else(|| DistrictError::Conversion {
            message: "No features array in boundary data".to_string(),
        })?;

    let boundaries: Vec<BoundaryFeature> = features.iter().filter_map(boundary_feature).collect();

    log::info!(
        "Extracted {} polygon features ({} skipped)",
        boundaries.len(),
        features.len() - boundaries.len()
    );

    Ok(boundaries)
}

fn boundary_feature(feature: &Value) -> Option<BoundaryFeature> {
    let geometry = feature.get("geometry").filter(|g| !g.is_null())?;
    let geometry_type = geometry.get("type").and_then(Value::as_str)?;

    if !is_polygon_type(geometry_type) {
        log::debug!("Skipping non-polygon feature ({geometry_type})");
        return None;
    }

    let name = feature
        .get("properties")
        .and_then(Value::as_object)
        .and_then(resolve_feature_name);

    let (name, key) = match name {
        Some(name) => {
            let key = canonical_key(&name);
            (name, key)
        }
        None => (UNKNOWN_DISTRICT.to_string(), String::new()),
    };

    Some(BoundaryFeature {
        name,
        key,
        geometry_type: geometry_type.to_string(),
        geometry: geometry.clone(),
    })
}

/// Returns `true` for `Polygon`, `MultiPolygon`, and similar tags.
#[must_use]
pub fn is_polygon_type(geometry_type: &str) -> bool {
    geometry_type.to_ascii_lowercase().contains("polygon")
}

/// Resolves a feature's display name from its properties.
///
/// Tries [`NAME_PROPERTY_KEYS`] in order, then any key matching
/// `district`, then any key matching `name` (both case-insensitive, keys
/// visited in map order). Only non-empty strings and numbers count.
#[must_use]
pub fn resolve_feature_name(properties: &Map<String, Value>) -> Option<String> {
    NAME_PROPERTY_KEYS
        .iter()
        .find_map(|key| properties.get(*key).and_then(property_text))
        .or_else(|| first_matching(properties, &DISTRICT_KEY_RE))
        .or_else(|| first_matching(properties, &NAME_KEY_RE))
}

fn first_matching(properties: &Map<String, Value>, pattern: &Regex) -> Option<String> {
    properties
        .iter()
        .filter(|(key, _)| pattern.is_match(key))
        .find_map(|(_, value)| property_text(value))
}

fn property_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: &Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn prefers_listed_keys_in_order() {
        let p = props(&json!({ "NAME": "Second", "ADM2_EN": "First" }));
        assert_eq!(resolve_feature_name(&p).as_deref(), Some("First"));
    }

    #[test]
    fn skips_blank_listed_keys() {
        let p = props(&json!({ "ADM2_EN": "  ", "district": "Sylhet" }));
        assert_eq!(resolve_feature_name(&p).as_deref(), Some("Sylhet"));
    }

    #[test]
    fn falls_back_to_district_like_then_name_like_keys() {
        let p = props(&json!({ "zila_name": "Name-ish", "dist_district_label": "District-ish" }));
        assert_eq!(resolve_feature_name(&p).as_deref(), Some("District-ish"));

        let p = props(&json!({ "Shape_Leng": 1.5, "zila_name": "Rajshahi" }));
        assert_eq!(resolve_feature_name(&p).as_deref(), Some("Rajshahi"));
    }

    #[test]
    fn unnamed_properties_resolve_to_none() {
        let p = props(&json!({ "id": 7, "area": 1.2 }));
        assert_eq!(resolve_feature_name(&p), None);
    }

    #[test]
    fn parses_polygon_features_only() {
        let collection = json!({
            "type": "FeatureCollection",
            "features": [
                { "geometry": { "type": "MultiPolygon", "coordinates": [] },
                  "properties": { "ADM2_EN": "Chittagong" } },
                { "geometry": { "type": "Point", "coordinates": [90.4, 23.8] },
                  "properties": { "ADM2_EN": "Dhaka" } },
                { "geometry": null, "properties": { "ADM2_EN": "Khulna" } },
                { "geometry": { "type": "polygon", "coordinates": [] },
                  "properties": { "id": 3 } }
            ]
        });
        let features = parse_feature_collection(&collection).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].name, "Chittagong");
        assert_eq!(features[0].key, "chattogram");
        assert_eq!(features[1].name, UNKNOWN_DISTRICT);
        assert_eq!(features[1].key, "");
        assert!(!features[1].is_resolved());
    }

    #[test]
    fn missing_properties_become_unknown() {
        let collection = json!({
            "features": [ { "geometry": { "type": "Polygon", "coordinates": [] } } ]
        });
        let features = parse_feature_collection(&collection).unwrap();
        assert_eq!(features[0].name, UNKNOWN_DISTRICT);
        assert_eq!(features[0].key, "");
    }

    #[test]
    fn rejects_documents_without_features() {
        assert!(matches!(
            parse_feature_collection(&json!({ "type": "Feature" })),
            Err(DistrictError::Conversion { .. })
        ));
        assert!(matches!(
            parse_boundaries("not json"),
            Err(DistrictError::Json(_))
        ));
    }
}
