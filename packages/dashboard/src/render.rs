//! Plain-text rendering of dashboard projections.

use std::fmt::Write as _;

use mob_map_district::color::fill_color;
use mob_map_district_models::{ColorBucket, FeatureCount};
use mob_map_incident_models::IncidentRecord;
use mob_map_table::pagination::{PageToken, PaginationControls};

use crate::links::{NO_SOURCES, source_links};
use crate::session::{Session, TableStatus};
use crate::summary::{CircleKind, Summary};

const TABLE_COLUMNS: &[&str] = &["#", "District", "Date", "Name", "Age", "Accused of"];

/// Renders the incident table area: rows, any open detail row, and the
/// page selector.
#[must_use]
pub fn render_table(session: &Session) -> String {
    let mut out = String::new();

    let filters: Vec<String> = session
        .view()
        .filters()
        .iter()
        .map(|f| {
            if f == session.view().active_filter() {
                format!("[{f}]")
            } else {
                f.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "Filter: {}", filters.join(" "));

    match session.table_status() {
        TableStatus::Failed(message) => {
            let _ = writeln!(out, "{message}");
            return out;
        }
        TableStatus::Empty(message) => {
            let _ = writeln!(out, "{message}");
            return out;
        }
        TableStatus::Ready => {}
    }

    let _ = writeln!(out, "{}", TABLE_COLUMNS.join(" | "));
    for row in session.visible_window() {
        let record = row.record;
        let _ = writeln!(
            out,
            "{} | {} | {} | {} | {} | {}",
            row.index + 1,
            record.district,
            record.date,
            record.name,
            record.age,
            record.accused_of
        );
        if row.expanded {
            out.push_str(&render_details(record));
        }
    }

    if let Some(controls) = session.pagination() {
        let _ = writeln!(out, "{}", render_pagination(&controls));
    }

    out
}

/// Renders the detail block for an expanded row.
#[must_use]
pub fn render_details(record: &IncidentRecord) -> String {
    let links = source_links(record);
    let sources = if links.is_empty() {
        NO_SOURCES.to_string()
    } else {
        links.join(" ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "    Cause of death: {}", record.cause_of_death);
    let _ = writeln!(out, "    Spontaneous: {}", record.spontaneous.label());
    let _ = writeln!(out, "    Brief: {}", record.news_brief);
    let _ = writeln!(out, "    Sources: {sources}");
    out
}

/// Renders the page selector on one line, e.g. `< 1 [2] 3 ... 9 >`.
#[must_use]
pub fn render_pagination(controls: &PaginationControls) -> String {
    let mut parts = Vec::with_capacity(controls.tokens.len() + 2);
    if controls.prev.is_some() {
        parts.push("<".to_string());
    }
    for token in &controls.tokens {
        parts.push(match token {
            PageToken::Page(page) if *page == controls.current => format!("[{page}]"),
            other => other.to_string(),
        });
    }
    if controls.next.is_some() {
        parts.push(">".to_string());
    }
    parts.join(" ")
}

/// Renders per-district counts, one line per feature.
#[must_use]
pub fn render_map(counts: &[FeatureCount]) -> String {
    let mut out = String::new();
    for entry in counts {
        let level = match entry.bucket {
            ColorBucket::NoData => "-".to_string(),
            ColorBucket::Level(level) => level.to_string(),
        };
        let _ = writeln!(
            out,
            "{:<24} {:>4}  {level} {}",
            entry.name,
            entry.count,
            fill_color(entry.bucket)
        );
    }
    out
}

/// Renders the summary figures and the circle grid.
#[must_use]
pub fn render_summary(summary: &Summary, grid: &[CircleKind]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Incidents: {}", summary.total);
    for (year, count) in &summary.by_year {
        let label = if year.is_empty() { "(untagged)" } else { year };
        let _ = writeln!(out, "  {label}: {count}");
    }
    let _ = writeln!(
        out,
        "Spontaneous: yes {} / no {} / unavailable {}",
        summary.spontaneity.yes, summary.spontaneity.no, summary.spontaneity.unavailable
    );

    for line in grid.chunks(20) {
        let cells: String = line
            .iter()
            .map(|kind| match kind {
                CircleKind::Baseline => 'o',
                CircleKind::Increase => '*',
            })
            .collect();
        let _ = writeln!(out, "{cells}");
    }
    out
}
