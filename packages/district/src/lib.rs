#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District name canonicalization, boundary parsing, and aggregation.
//!
//! Incident rows and boundary polygons spell district names differently
//! ("Chittagong" vs "Chattogram", "Cox's Bazar" vs "Coxs Bazar"). Both
//! sides are folded through [`canonical::canonical_key`] so that the
//! per-district counts in [`aggregate`] join on the same key.

pub mod aggregate;
pub mod aliases;
pub mod canonical;
pub mod color;
pub mod features;

use thiserror::Error;

/// Errors that can occur while reading boundary data.
#[derive(Debug, Error)]
pub enum DistrictError {
    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but is not a usable feature collection.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}
