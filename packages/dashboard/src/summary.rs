//! Aggregate figures for the textual summary and the circle grid.

use std::collections::BTreeMap;

use mob_map_incident_models::{IncidentRecord, Spontaneity};
use serde::Serialize;

/// Record counts per spontaneity value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpontaneityCounts {
    /// Reported as spontaneous.
    pub yes: usize,
    /// Reported as not spontaneous.
    pub no: usize,
    /// No usable answer.
    pub unavailable: usize,
}

impl SpontaneityCounts {
    /// Count for one flag value.
    #[must_use]
    pub const fn get(&self, value: Spontaneity) -> usize {
        match value {
            Spontaneity::Yes => self.yes,
            Spontaneity::No => self.no,
            Spontaneity::Indeterminate => self.unavailable,
        }
    }

    fn add(&mut self, value: Spontaneity) {
        match value {
            Spontaneity::Yes => self.yes += 1,
            Spontaneity::No => self.no += 1,
            Spontaneity::Indeterminate => self.unavailable += 1,
        }
    }
}

/// Whole-dataset summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of records.
    pub total: usize,
    /// Records per trimmed year-scope tag. Untagged records count under `""`.
    pub by_year: BTreeMap<String, usize>,
    /// Spontaneity breakdown.
    pub spontaneity: SpontaneityCounts,
}

/// Summarizes a record set.
#[must_use]
pub fn summarize(records: &[IncidentRecord]) -> Summary {
    let mut summary = Summary {
        total: records.len(),
        ..Summary::default()
    };

    for record in records {
        *summary
            .by_year
            .entry(record.year_scope().to_string())
            .or_default() += 1;
        summary.spontaneity.add(record.spontaneous);
    }

    summary
}

/// One cell of the circle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleKind {
    /// Part of the earlier baseline.
    Baseline,
    /// Part of the increase over the baseline.
    Increase,
}

/// Lays out `total` circles, the first `baseline` as [`CircleKind::Baseline`].
#[must_use]
pub fn circle_grid(baseline: usize, total: usize) -> Vec<CircleKind> {
    (0..total)
        .map(|i| {
            if i < baseline {
                CircleKind::Baseline
            } else {
                CircleKind::Increase
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: &str, spontaneous: Spontaneity) -> IncidentRecord {
        IncidentRecord {
            year_sheet: year.to_string(),
            spontaneous,
            ..IncidentRecord::default()
        }
    }

    #[test]
    fn counts_years_and_spontaneity() {
        let records = vec![
            record("2023", Spontaneity::Yes),
            record(" 2023", Spontaneity::No),
            record("2025", Spontaneity::Indeterminate),
            record("", Spontaneity::Yes),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.by_year.get("2023"), Some(&2));
        assert_eq!(summary.by_year.get("2025"), Some(&1));
        assert_eq!(summary.by_year.get(""), Some(&1));
        assert_eq!(summary.spontaneity.get(Spontaneity::Yes), 2);
        assert_eq!(summary.spontaneity.no, 1);
        assert_eq!(summary.spontaneity.unavailable, 1);
    }

    #[test]
    fn empty_set_summarizes_to_zero() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn circle_grid_splits_baseline_and_increase() {
        let grid = circle_grid(38, 139);
        assert_eq!(grid.len(), 139);
        assert_eq!(grid.iter().filter(|c| **c == CircleKind::Baseline).count(), 38);
        assert_eq!(grid[37], CircleKind::Baseline);
        assert_eq!(grid[38], CircleKind::Increase);
    }

    #[test]
    fn circle_grid_clamps_oversized_baseline() {
        assert!(circle_grid(10, 3).iter().all(|c| *c == CircleKind::Baseline));
    }
}
