//! Filter/page state for the incident table.
//!
//! The state is `(active_filter, current_page)` plus at most one expanded
//! row. Transitions that would be redundant or land out of range are
//! ignored and reported as `false`; nothing here returns an error.

use mob_map_incident_models::{IncidentRecord, YearFilter};
use serde::Serialize;

use crate::pagination::{PaginationControls, is_navigable, total_pages};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A row in the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRow<'a> {
    /// Position within the filtered record list (0-based). Stable across
    /// pages, so it doubles as the detail-row identifier.
    pub index: usize,
    /// The record shown in this row.
    pub record: &'a IncidentRecord,
    /// Whether the detail row is open.
    pub expanded: bool,
}

/// Live table state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    filters: Vec<YearFilter>,
    active_filter: YearFilter,
    current_page: usize,
    page_size: usize,
    expanded: Option<usize>,
}

impl ViewState {
    /// Creates the state on page 1 with the `all` filter active.
    ///
    /// `filters` is the closed set of selectable filters; `all` is added
    /// when missing. A zero page size is treated as one.
    #[must_use]
    pub fn new(page_size: usize, filters: Vec<YearFilter>) -> Self {
        let mut unique: Vec<YearFilter> = Vec::with_capacity(filters.len() + 1);
        for filter in filters {
            if !unique.contains(&filter) {
                unique.push(filter);
            }
        }
        if !unique.contains(&YearFilter::All) {
            unique.insert(0, YearFilter::All);
        }

        Self {
            filters: unique,
            active_filter: YearFilter::All,
            current_page: 1,
            page_size: page_size.max(1),
            expanded: None,
        }
    }

    /// Selectable filters, in display order.
    #[must_use]
    pub fn filters(&self) -> &[YearFilter] {
        &self.filters
    }

    /// The active filter.
    #[must_use]
    pub const fn active_filter(&self) -> &YearFilter {
        &self.active_filter
    }

    /// The current 1-based page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Filtered index of the open detail row, if any.
    #[must_use]
    pub const fn expanded_row(&self) -> Option<usize> {
        self.expanded
    }

    /// Switches the active filter.
    ///
    /// Ignored when `filter` is already active or is not one of
    /// [`Self::filters`]. Otherwise resets to page 1 and collapses any open
    /// row. Returns whether anything changed.
    pub fn set_filter(&mut self, filter: YearFilter) -> bool {
        if filter == self.active_filter || !self.filters.contains(&filter) {
            return false;
        }

        log::debug!("Table filter {} -> {filter}", self.active_filter);
        self.active_filter = filter;
        self.current_page = 1;
        self.expanded = None;
        true
    }

    /// Moves to `page` of the current filter's results.
    ///
    /// Ignored for page `0`, pages past the end, and the current page.
    /// Returns whether anything changed.
    pub fn set_page(&mut self, page: usize, records: &[IncidentRecord]) -> bool {
        let total = self.total_pages(records);
        if !is_navigable(page, self.current_page, total) {
            return false;
        }

        self.current_page = page;
        self.expanded = None;
        true
    }

    /// Opens the detail row at filtered `index`, closing any other.
    /// Toggling the open row closes it. Rows outside the visible window
    /// are ignored. Returns whether anything changed.
    pub fn toggle_row(&mut self, index: usize, records: &[IncidentRecord]) -> bool {
        let visible = self.window_range(self.filtered_len(records));
        if !visible.contains(&index) {
            return false;
        }

        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    /// Returns to page 1 with no open row, keeping the active filter. Used
    /// when the record set is replaced wholesale.
    pub const fn reset_page(&mut self) {
        self.current_page = 1;
        self.expanded = None;
    }

    /// Records matching the active filter, in source order.
    pub fn filtered<'a>(
        &'a self,
        records: &'a [IncidentRecord],
    ) -> impl Iterator<Item = &'a IncidentRecord> + 'a {
        records.iter().filter(|r| self.active_filter.matches(r))
    }

    /// Number of records matching the active filter.
    #[must_use]
    pub fn filtered_len(&self, records: &[IncidentRecord]) -> usize {
        self.filtered(records).count()
    }

    /// Page count for the active filter.
    #[must_use]
    pub fn total_pages(&self, records: &[IncidentRecord]) -> usize {
        total_pages(self.filtered_len(records), self.page_size)
    }

    /// The slice of filtered records on the current page.
    #[must_use]
    pub fn visible_window<'a>(&self, records: &'a [IncidentRecord]) -> Vec<WindowRow<'a>> {
        let start = (self.current_page - 1) * self.page_size;
        records
            .iter()
            .filter(|r| self.active_filter.matches(r))
            .enumerate()
            .skip(start)
            .take(self.page_size)
            .map(|(index, record)| WindowRow {
                index,
                record,
                expanded: self.expanded == Some(index),
            })
            .collect()
    }

    /// Page selector for the active filter, or `None` for a single page.
    #[must_use]
    pub fn pagination(&self, records: &[IncidentRecord]) -> Option<PaginationControls> {
        PaginationControls::new(
            self.filtered_len(records),
            self.page_size,
            self.current_page,
        )
    }

    fn window_range(&self, filtered_len: usize) -> std::ops::Range<usize> {
        let start = (self.current_page - 1) * self.page_size;
        start..(start + self.page_size).min(filtered_len)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(
            DEFAULT_PAGE_SIZE,
            vec![YearFilter::All, YearFilter::parse("2023"), YearFilter::parse("2025")],
        )
    }
}
