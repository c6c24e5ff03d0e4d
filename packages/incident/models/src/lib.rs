#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident record types shared across the mob-map workspace.
//!
//! An [`IncidentRecord`] is one validated row of the incident dataset.
//! Records are built once by the ingest pipeline and are read-only for the
//! rest of the session: the table view, the district aggregator, and the
//! summary all borrow the same set.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Whether an incident was reported as a spontaneous mob action.
///
/// Derived once from the free-text `spontaneous_mob` column. Exactly one
/// variant holds for every record, so a record can never be both
/// spontaneous and not.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Spontaneity {
    /// The cell read `yes` (any case).
    Yes,
    /// The cell read `no` (any case).
    No,
    /// Blank, `unsure`, `unknown`, or anything else.
    #[default]
    Indeterminate,
}

impl Spontaneity {
    /// Derives the flag from a raw cell value.
    ///
    /// Only an exact, case-insensitive `yes` or `no` (after trimming)
    /// resolves; everything else is [`Self::Indeterminate`].
    #[must_use]
    pub fn from_cell(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("yes") {
            Self::Yes
        } else if value.eq_ignore_ascii_case("no") {
            Self::No
        } else {
            Self::Indeterminate
        }
    }

    /// Display label used by the summary visualization.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Indeterminate => "Unavailable",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Yes, Self::No, Self::Indeterminate]
    }
}

/// One validated incident row.
///
/// Every field is populated; a blank source cell is an empty string, never
/// a missing value. Values are already trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// District name as written in the source.
    pub district: String,
    /// Canonical join key for [`Self::district`]. Empty when the name does
    /// not resolve to anything.
    pub district_key: String,
    /// Incident date, free-form.
    pub date: String,
    /// Name of the victim.
    pub name: String,
    /// Age of the victim. Not necessarily numeric.
    pub age: String,
    /// What the victim was accused of.
    pub accused_of: String,
    /// Reported cause of death.
    pub cause_of_death: String,
    /// Narrative news brief.
    pub news_brief: String,
    /// First news source URL, unvalidated.
    pub source_url_1: String,
    /// Second news source URL, unvalidated.
    pub source_url_2: String,
    /// Reporting-period tag (e.g. `"2023"`, `"2025"`).
    pub year_sheet: String,
    /// Spontaneity flag derived at mapping time.
    pub spontaneous: Spontaneity,
}

impl IncidentRecord {
    /// Returns the year-scope tag with surrounding whitespace removed.
    #[must_use]
    pub fn year_scope(&self) -> &str {
        self.year_sheet.trim()
    }

    /// Returns both source URL cells in column order.
    #[must_use]
    pub fn source_urls(&self) -> [&str; 2] {
        [&self.source_url_1, &self.source_url_2]
    }
}

/// The tag that selects which reporting period is in scope.
///
/// Parsed from strings like `"all"` or `"2023"`. `All` matches every
/// record; `Year` matches on exact equality with the trimmed
/// `year_sheet` value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum YearFilter {
    /// No restriction.
    #[default]
    All,
    /// A single reporting period.
    Year(String),
}

impl YearFilter {
    /// Parses a filter tag. Blank input and `all` (any case) map to
    /// [`Self::All`].
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Year(tag.to_string())
        }
    }

    /// Returns `true` if `record` falls within this scope.
    #[must_use]
    pub fn matches(&self, record: &IncidentRecord) -> bool {
        match self {
            Self::All => true,
            Self::Year(year) => record.year_scope() == year,
        }
    }

    /// Returns the tag string (`"all"` or the year).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Year(year) => year,
        }
    }
}

impl std::fmt::Display for YearFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for YearFilter {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

impl Serialize for YearFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for YearFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::parse(&tag))
    }
}
