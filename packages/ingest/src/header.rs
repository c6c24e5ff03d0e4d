//! Column header canonicalization.
//!
//! Maps whatever the spreadsheet export called a column ("Accused Of",
//! "accused-of", " ACCUSED_OF ") onto one internal name (`accused_of`).

use regex::Regex;
use std::sync::LazyLock;

/// Runs of anything that is not a lowercase ASCII letter or digit.
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Canonicalizes one header.
///
/// Trims, lowercases, collapses every run of non-alphanumeric characters
/// into a single `_`, then strips leading and trailing underscores. A
/// header made only of punctuation becomes the empty string.
#[must_use]
pub fn normalize_header(value: &str) -> String {
    let lower = value.trim().to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lower, "_")
        .trim_matches('_')
        .to_string()
}

/// Canonicalizes a whole header row, preserving column order.
#[must_use]
pub fn normalize_headers(row: &[String]) -> Vec<String> {
    row.iter().map(|h| normalize_header(h)).collect()
}
