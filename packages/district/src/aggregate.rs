//! Per-district incident aggregation.
//!
//! Two passes: incidents are counted by the district key stored on each
//! record at mapping time, then each boundary feature looks its own
//! canonical key up in those counts. Keys are never compared in their raw
//! spelling.

use std::collections::{BTreeMap, BTreeSet};

use mob_map_district_models::{BoundaryFeature, FeatureCount};
use mob_map_incident_models::{IncidentRecord, YearFilter};

use crate::color::ColorScale;

/// Counts incidents in `scope` by [`IncidentRecord::district_key`].
///
/// Records with an empty key are skipped.
#[must_use]
pub fn count_by_district<'a, I>(records: I, scope: &YearFilter) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = &'a IncidentRecord>,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut unresolved = 0_usize;

    for record in records.into_iter().filter(|r| scope.matches(r)) {
        if record.district_key.is_empty() {
            unresolved += 1;
            continue;
        }
        *counts.entry(record.district_key.clone()).or_default() += 1;
    }

    if unresolved > 0 {
        log::debug!("{unresolved} incidents in scope '{scope}' have no resolvable district");
    }

    counts
}

/// Joins per-key counts onto boundary features.
///
/// Produces one entry per feature in input order. Features with an empty
/// key always get a count of zero.
#[must_use]
pub fn aggregate(
    features: &[BoundaryFeature],
    counts: &BTreeMap<String, u64>,
    scale: &ColorScale,
) -> Vec<FeatureCount> {
    features
        .iter()
        .map(|feature| {
            let count = if feature.is_resolved() {
                counts.get(&feature.key).copied().unwrap_or(0)
            } else {
                0
            };
            FeatureCount {
                key: feature.key.clone(),
                name: feature.name.clone(),
                count,
                bucket: scale.bucket_for(&feature.key, count),
            }
        })
        .collect()
}

/// Counts and joins in one step for a single year scope.
#[must_use]
pub fn district_counts(
    records: &[IncidentRecord],
    features: &[BoundaryFeature],
    scope: &YearFilter,
    scale: &ColorScale,
) -> Vec<FeatureCount> {
    let counts = count_by_district(records, scope);

    let unmatched = unmatched_keys(&counts, features);
    if !unmatched.is_empty() {
        log::debug!(
            "Districts with incidents but no boundary polygon: {}",
            unmatched.join(", ")
        );
    }

    aggregate(features, &counts, scale)
}

/// Returns incident keys that no boundary feature claims.
///
/// These are known gaps in the alias table rather than errors.
#[must_use]
pub fn unmatched_keys<'a>(
    counts: &'a BTreeMap<String, u64>,
    features: &[BoundaryFeature],
) -> Vec<&'a str> {
    let claimed: BTreeSet<&str> = features.iter().map(|f| f.key.as_str()).collect();
    counts
        .keys()
        .map(String::as_str)
        .filter(|key| !claimed.contains(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonical_key;
    use mob_map_district_models::{ColorBucket, UNKNOWN_DISTRICT};

    fn record(district: &str, year: &str) -> IncidentRecord {
        IncidentRecord {
            district: district.to_string(),
            district_key: canonical_key(district),
            year_sheet: year.to_string(),
            ..IncidentRecord::default()
        }
    }

    fn feature(name: &str) -> BoundaryFeature {
        BoundaryFeature {
            name: name.to_string(),
            key: canonical_key(name),
            geometry_type: "Polygon".to_string(),
            geometry: serde_json::Value::Null,
        }
    }

    fn unknown_feature() -> BoundaryFeature {
        BoundaryFeature {
            name: UNKNOWN_DISTRICT.to_string(),
            key: String::new(),
            geometry_type: "Polygon".to_string(),
            geometry: serde_json::Value::Null,
        }
    }

    #[test]
    fn counts_by_canonical_key_within_scope() {
        let records = vec![
            record("Chittagong", "2025"),
            record("Chattogram", "2025"),
            record("Dhaka", "2025"),
            record("Dhaka", "2023"),
            record("???", "2025"),
        ];
        let counts = count_by_district(&records, &YearFilter::parse("2025"));
        assert_eq!(counts.get("chattogram"), Some(&2));
        assert_eq!(counts.get("dhaka"), Some(&1));
        assert_eq!(counts.get(""), None);
        assert_eq!(counts.len(), 2);

        let all = count_by_district(&records, &YearFilter::All);
        assert_eq!(all.get("dhaka"), Some(&2));
    }

    #[test]
    fn stored_key_drives_the_count() {
        let records = vec![
            IncidentRecord {
                district: "Dhaka".to_string(),
                district_key: "gazipur".to_string(),
                ..IncidentRecord::default()
            },
            IncidentRecord {
                district: "Sylhet".to_string(),
                district_key: String::new(),
                ..IncidentRecord::default()
            },
        ];
        let counts = count_by_district(&records, &YearFilter::All);
        assert_eq!(counts.get("gazipur"), Some(&1));
        assert_eq!(counts.get("dhaka"), None);
        assert_eq!(counts.get("sylhet"), None);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn joins_differently_spelled_sides() {
        let records = vec![record("Chittagong", "2025"), record("Comilla", "2025")];
        let features = vec![feature("Chattogram"), feature("Cumilla"), feature("Sylhet")];
        let result = district_counts(
            &records,
            &features,
            &YearFilter::parse("2025"),
            &ColorScale::default(),
        );
        let counts: Vec<u64> = result.iter().map(|f| f.count).collect();
        assert_eq!(counts, vec![1, 1, 0]);
        assert_eq!(result[0].bucket, ColorBucket::Level(0));
        assert_eq!(result[2].bucket, ColorBucket::NoData);
    }

    #[test]
    fn unresolved_records_and_zero_matches_render_the_same() {
        let features = vec![feature("Dhaka"), feature("Khulna"), unknown_feature()];
        let scale = ColorScale::default();
        let scope = YearFilter::All;

        let unresolvable = vec![record("--", "2025"), record("", "2023")];
        let no_matches = vec![record("Rangpur", "2025")];

        let a = district_counts(&unresolvable, &features, &scope, &scale);
        let b = district_counts(&no_matches, &features, &scope, &scale);

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.count, 0);
            assert_eq!(x.bucket, ColorBucket::NoData);
            assert_eq!(x.bucket, y.bucket);
            assert_eq!(x.count, y.count);
        }
    }

    #[test]
    fn unknown_feature_never_collects_counts() {
        let mut counts = BTreeMap::new();
        counts.insert(String::new(), 5);
        counts.insert("unknown".to_string(), 3);
        let result = aggregate(&[unknown_feature()], &counts, &ColorScale::default());
        assert_eq!(result[0].count, 0);
        assert_eq!(result[0].bucket, ColorBucket::NoData);
        assert_eq!(result[0].name, UNKNOWN_DISTRICT);
    }

    #[test]
    fn reports_unmatched_incident_keys() {
        let records = vec![record("Dhaka", "2025"), record("Atlantis", "2025")];
        let counts = count_by_district(&records, &YearFilter::All);
        assert_eq!(unmatched_keys(&counts, &[feature("Dhaka")]), vec!["atlantis"]);
    }
}
