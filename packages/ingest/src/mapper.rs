//! Maps parsed rows into [`IncidentRecord`]s.
//!
//! The header row is validated against a fixed set of required columns
//! before any data row is touched. Once the schema check passes, mapping a
//! row never fails: absent cells become empty strings and unrecognised
//! spontaneity values become [`Spontaneity::Indeterminate`].

use std::collections::{BTreeMap, BTreeSet};

use mob_map_district::canonical::canonical_key;
use mob_map_incident_models::{IncidentRecord, Spontaneity};

use crate::IngestError;
use crate::header::normalize_headers;

/// Canonical columns every source must provide.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "district",
    "date",
    "name",
    "age",
    "accused_of",
    "cause_of_death",
    "source_url_1",
    "source_url_2",
    "year_sheet",
    "spontaneous_mob",
];

/// Accepted spellings of the narrative column, in preference order.
pub const NARRATIVE_COLUMNS: &[&str] = &["news_brief", "new_brief"];

/// Returns every required column absent from `headers`.
///
/// Computed as a set difference so that all missing columns are reported
/// together. A missing narrative column is reported once under its
/// preferred spelling.
#[must_use]
pub fn missing_columns(headers: &[String]) -> Vec<String> {
    let present: BTreeSet<&str> = headers.iter().map(String::as_str).collect();

    let mut missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !present.contains(*column))
        .map(|column| (*column).to_string())
        .collect();

    if !NARRATIVE_COLUMNS.iter().any(|c| present.contains(c)) {
        missing.push(format!(
            "{} (or {})",
            NARRATIVE_COLUMNS[0], NARRATIVE_COLUMNS[1]
        ));
    }

    missing
}

/// Maps all rows after the header into records.
///
/// Input with fewer than two rows (no data) maps to an empty set without
/// validating the header.
///
/// # Errors
///
/// Returns [`IngestError::MissingColumns`] naming every absent required
/// column.
pub fn map_records(rows: &[Vec<String>]) -> Result<Vec<IncidentRecord>, IngestError> {
    let Some((header_row, data)) = rows.split_first() else {
        return Ok(Vec::new());
    };
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let headers = normalize_headers(header_row);
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns { columns: missing });
    }

    let columns = ColumnIndex::new(&headers);
    Ok(data.iter().map(|row| columns.map_row(row)).collect())
}

/// Header name to column position. When a header repeats, the rightmost
/// column wins.
struct ColumnIndex<'a> {
    positions: BTreeMap<&'a str, usize>,
}

impl<'a> ColumnIndex<'a> {
    fn new(headers: &'a [String]) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.as_str(), i))
            .collect();
        Self { positions }
    }

    fn cell<'r>(&self, row: &'r [String], column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|&i| row.get(i))
            .map_or("", |value| value.trim())
    }

    fn owned(&self, row: &[String], column: &str) -> String {
        self.cell(row, column).to_string()
    }

    fn map_row(&self, row: &[String]) -> IncidentRecord {
        let district = self.owned(row, "district");
        let news_brief = NARRATIVE_COLUMNS
            .iter()
            .map(|column| self.cell(row, column))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
            .to_string();

        IncidentRecord {
            district_key: canonical_key(&district),
            district,
            date: self.owned(row, "date"),
            name: self.owned(row, "name"),
            age: self.owned(row, "age"),
            accused_of: self.owned(row, "accused_of"),
            cause_of_death: self.owned(row, "cause_of_death"),
            news_brief,
            source_url_1: self.owned(row, "source_url_1"),
            source_url_2: self.owned(row, "source_url_2"),
            year_sheet: self.owned(row, "year_sheet"),
            spontaneous: Spontaneity::from_cell(self.cell(row, "spontaneous_mob")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    fn full_header() -> Vec<String> {
        row(&[
            "District",
            "Date",
            "Name",
            "Age",
            "Accused Of",
            "Cause of Death",
            "News Brief",
            "Source URL 1",
            "Source URL 2",
            "Year Sheet",
            "Spontaneous Mob",
        ])
    }

    #[test]
    fn maps_cells_by_header_position() {
        let rows = vec![
            full_header(),
            row(&[
                " Chittagong ",
                "2025-03-01",
                "Karim",
                "unknown",
                "Theft",
                "Beaten",
                "Brief",
                "https://one.example",
                "",
                " 2025 ",
                "YES",
            ]),
        ];
        let records = map_records(&rows).unwrap();
        let record = &records[0];
        assert_eq!(record.district, "Chittagong");
        assert_eq!(record.district_key, "chattogram");
        assert_eq!(record.age, "unknown");
        assert_eq!(record.year_sheet, "2025");
        assert_eq!(record.source_url_2, "");
        assert_eq!(record.spontaneous, Spontaneity::Yes);
    }

    #[test]
    fn short_rows_default_to_empty_strings() {
        let rows = vec![full_header(), row(&["Dhaka", "2023-05-05"])];
        let record = &map_records(&rows).unwrap()[0];
        assert_eq!(record.date, "2023-05-05");
        assert_eq!(record.name, "");
        assert_eq!(record.year_sheet, "");
        assert_eq!(record.spontaneous, Spontaneity::Indeterminate);
    }

    #[test]
    fn accepts_alternate_narrative_spelling() {
        let mut header = full_header();
        header[6] = "New Brief".to_string();
        let rows = vec![header, row(&["", "", "", "", "", "", "Story"])];
        assert_eq!(map_records(&rows).unwrap()[0].news_brief, "Story");
    }

    #[test]
    fn reports_every_missing_column() {
        let rows = vec![
            row(&["district", "date", "name", "age", "accused_of"]),
            row(&["x"]),
        ];
        let Err(IngestError::MissingColumns { columns }) = map_records(&rows) else {
            panic!("expected missing columns");
        };
        assert_eq!(
            columns,
            vec![
                "cause_of_death",
                "source_url_1",
                "source_url_2",
                "year_sheet",
                "spontaneous_mob",
                "news_brief (or new_brief)",
            ]
        );
    }

    #[test]
    fn header_only_input_maps_to_nothing() {
        assert!(map_records(&[row(&["whatever"])]).unwrap().is_empty());
        assert!(map_records(&[]).unwrap().is_empty());
    }

    #[test]
    fn ambiguous_spontaneity_is_indeterminate() {
        let mut rows = vec![full_header()];
        for value in ["unsure", "", "Unknown", "y"] {
            let mut cells = vec![""; 10];
            cells.push(value);
            rows.push(row(&cells));
        }
        let records = map_records(&rows).unwrap();
        assert!(
            records
                .iter()
                .all(|r| r.spontaneous == Spontaneity::Indeterminate)
        );
    }

    #[test]
    fn unresolvable_district_gets_empty_key() {
        let rows = vec![full_header(), row(&["---"])];
        assert_eq!(map_records(&rows).unwrap()[0].district_key, "");
    }
}
