#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District boundary types.
//!
//! Defines the boundary feature extracted from a polygon collection and the
//! per-feature aggregation result consumed by the choropleth renderer.

use serde::{Deserialize, Serialize};

/// Display name given to features with no resolvable name property.
pub const UNKNOWN_DISTRICT: &str = "Unknown";

/// One polygon from the boundary source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryFeature {
    /// Display name, or [`UNKNOWN_DISTRICT`].
    pub name: String,
    /// Canonical join key. Empty when the name could not be resolved.
    pub key: String,
    /// Geometry type tag as written in the source (e.g. `"MultiPolygon"`).
    pub geometry_type: String,
    /// Raw geometry, passed through untouched.
    pub geometry: serde_json::Value,
}

impl BoundaryFeature {
    /// Returns `true` if this feature has a usable join key.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.key.is_empty()
    }
}

/// How a feature should be colored on the choropleth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "level", rename_all = "snake_case")]
pub enum ColorBucket {
    /// No incidents, or the feature could not be joined at all.
    NoData,
    /// Index into the positive-count palette, `0` being the lightest.
    Level(u8),
}

/// Aggregated incident count for one boundary feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCount {
    /// Canonical key of the feature (empty when unresolved).
    pub key: String,
    /// Display name of the feature.
    pub name: String,
    /// Incidents recorded for this key in the year scope.
    pub count: u64,
    /// Color treatment for [`Self::count`].
    pub bucket: ColorBucket,
}
