#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Turns raw incident CSV text into validated [`IncidentRecord`]s.
//!
//! The pipeline is three pure steps: [`parse::parse_rows`] splits the text
//! into rows of fields, [`header::normalize_headers`] canonicalizes the
//! first row, and [`mapper::map_records`] checks the required columns and
//! maps every remaining row into a typed record.

pub mod header;
pub mod mapper;
pub mod parse;

use mob_map_incident_models::IncidentRecord;
use thiserror::Error;

/// Errors that can occur while ingesting incident text.
#[derive(Debug, Error)]
pub enum IngestError {
    /// One or more required columns are absent from the header row.
    #[error("Missing CSV columns: {}", columns.join(", "))]
    MissingColumns {
        /// Every absent column, in required-column order.
        columns: Vec<String>,
    },
}

/// Parses and maps a complete CSV document.
///
/// # Errors
///
/// Returns [`IngestError::MissingColumns`] if the header row lacks any
/// required column.
pub fn load_records(text: &str, delimiter: u8) -> Result<Vec<IncidentRecord>, IngestError> {
    let rows = parse::parse_rows(text, delimiter);
    log::debug!("Parsed {} non-blank rows", rows.len());

    let records = mapper::map_records(&rows)?;
    log::info!("Mapped {} incident records", records.len());

    Ok(records)
}
