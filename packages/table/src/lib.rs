#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident table projection.
//!
//! [`view::ViewState`] holds the active year filter, the current page, and
//! the expanded row. [`pagination`] turns a page count into the compact
//! token sequence shown by the page selector.

pub mod pagination;
pub mod view;
