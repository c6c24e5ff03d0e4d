#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard core for the mob violence incident map.
//!
//! Loads the incident CSV and the district boundaries from configured
//! candidate locations, then exposes a [`session::Session`] holding the
//! table view state alongside the choropleth and summary projections.

pub mod config;
pub mod links;
pub mod render;
pub mod resource;
pub mod session;
pub mod summary;

pub use config::{ConfigError, DashboardConfig};
pub use resource::{LoadError, Resource};
pub use session::{Session, SessionError, TableStatus};
