//! The session controller.
//!
//! [`Session`] owns the record set, the boundary features, and the single
//! [`ViewState`]. Rendering code borrows projections from it and calls back
//! only through [`Session::set_filter`], [`Session::set_page`], and
//! [`Session::toggle_row`].
//!
//! The table and the map load independently: a missing boundary file does
//! not hide the table, and a broken CSV does not hide the map outline.

use mob_map_district::aggregate::district_counts;
use mob_map_district::color::ColorScale;
use mob_map_district::features::parse_boundaries;
use mob_map_district_models::{BoundaryFeature, FeatureCount};
use mob_map_incident_models::{IncidentRecord, YearFilter};
use mob_map_table::pagination::PaginationControls;
use mob_map_table::view::{ViewState, WindowRow};
use thiserror::Error;

use crate::config::{DashboardConfig, SummaryConfig};
use crate::resource::{Resource, load_resource};
use crate::summary::{CircleKind, Summary, circle_grid, summarize};

/// Shown in place of table rows when the active filter matches nothing.
pub const NO_ROWS_MESSAGE: &str = "No rows found for this filter.";

/// Appended to table load failures.
pub const LOAD_HINT: &str =
    "Ensure the incident CSV is reachable from one of the configured locations.";

/// What the table area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    /// Rows are available for the active filter.
    Ready,
    /// Loaded fine, but the active filter matches nothing.
    Empty(&'static str),
    /// Loading or validation failed.
    Failed(String),
}

/// Errors returned by session projections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The boundary data could not be loaded or parsed at startup.
    #[error("{message}")]
    MapUnavailable {
        /// The load failure message.
        message: String,
    },
}

/// Result of loading one side of the dashboard.
#[derive(Debug)]
enum Loaded<T> {
    Ready(T),
    Failed(String),
}

/// Live dashboard state.
#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<IncidentRecord>,
    table_error: Option<String>,
    boundaries: Vec<BoundaryFeature>,
    map_error: Option<String>,
    view: ViewState,
    scale: ColorScale,
    map_year: YearFilter,
    summary: SummaryConfig,
}

impl Session {
    /// Loads both resources and builds the session.
    ///
    /// Never fails: each resource that cannot be loaded or parsed is
    /// recorded as a failure message for its own view.
    pub async fn bootstrap(config: &DashboardConfig, client: &reqwest::Client) -> Self {
        let base_dir = config.sources.base_dir.as_deref();

        let table = match config.delimiter() {
            Ok(delimiter) => {
                match load_resource(client, Resource::IncidentCsv, &config.sources.csv, base_dir)
                    .await
                {
                    Ok(text) => match mob_map_ingest::load_records(&text, delimiter) {
                        Ok(records) => Loaded::Ready(records),
                        Err(e) => Loaded::Failed(e.to_string()),
                    },
                    Err(e) => Loaded::Failed(e.to_string()),
                }
            }
            Err(e) => Loaded::Failed(e.to_string()),
        };

        let map = match load_resource(
            client,
            Resource::Boundaries,
            &config.sources.boundaries,
            base_dir,
        )
        .await
        {
            Ok(text) => match parse_boundaries(&text) {
                Ok(features) => Loaded::Ready(features),
                Err(e) => Loaded::Failed(e.to_string()),
            },
            Err(e) => Loaded::Failed(e.to_string()),
        };

        Self::assemble(config, table, map)
    }

    /// Builds a session from already-loaded data.
    #[must_use]
    pub fn from_parts(
        config: &DashboardConfig,
        records: Vec<IncidentRecord>,
        boundaries: Vec<BoundaryFeature>,
    ) -> Self {
        Self::assemble(config, Loaded::Ready(records), Loaded::Ready(boundaries))
    }

    fn assemble(
        config: &DashboardConfig,
        table: Loaded<Vec<IncidentRecord>>,
        map: Loaded<Vec<BoundaryFeature>>,
    ) -> Self {
        let (records, table_error) = match table {
            Loaded::Ready(records) => (records, None),
            Loaded::Failed(message) => {
                log::error!("Incident table unavailable: {message}");
                (Vec::new(), Some(format!("{message}. {LOAD_HINT}")))
            }
        };
        let (boundaries, map_error) = match map {
            Loaded::Ready(features) => (features, None),
            Loaded::Failed(message) => {
                log::error!("District map unavailable: {message}");
                (Vec::new(), Some(message))
            }
        };

        Self {
            records,
            table_error,
            boundaries,
            map_error,
            view: ViewState::new(config.table.page_size, config.table.filters.clone()),
            scale: ColorScale::new(config.map.max_count),
            map_year: config.map.year.clone(),
            summary: config.summary,
        }
    }

    /// Replaces the whole record set and returns the table to page 1.
    pub fn replace_records(&mut self, records: Vec<IncidentRecord>) {
        log::info!("Replacing {} records with {}", self.records.len(), records.len());
        self.records = records;
        self.table_error = None;
        self.view.reset_page();
    }

    /// The full record set.
    #[must_use]
    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    /// The boundary features (empty when the map failed to load).
    #[must_use]
    pub fn boundaries(&self) -> &[BoundaryFeature] {
        &self.boundaries
    }

    /// The table view state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// What the table area should show right now.
    #[must_use]
    pub fn table_status(&self) -> TableStatus {
        if let Some(message) = &self.table_error {
            return TableStatus::Failed(message.clone());
        }
        if self.view.filtered_len(&self.records) == 0 {
            return TableStatus::Empty(NO_ROWS_MESSAGE);
        }
        TableStatus::Ready
    }

    /// Switches the table filter by tag (`"all"`, `"2023"`, ...).
    pub fn set_filter(&mut self, tag: &str) -> bool {
        self.view.set_filter(YearFilter::parse(tag))
    }

    /// Moves the table to `page`.
    pub fn set_page(&mut self, page: usize) -> bool {
        self.view.set_page(page, &self.records)
    }

    /// Expands or collapses the detail row at filtered `index`.
    pub fn toggle_row(&mut self, index: usize) -> bool {
        self.view.toggle_row(index, &self.records)
    }

    /// Rows on the current table page.
    #[must_use]
    pub fn visible_window(&self) -> Vec<WindowRow<'_>> {
        self.view.visible_window(&self.records)
    }

    /// Page selector for the table, `None` for a single page.
    #[must_use]
    pub fn pagination(&self) -> Option<PaginationControls> {
        self.view.pagination(&self.records)
    }

    /// The map's default year scope.
    #[must_use]
    pub const fn map_year(&self) -> &YearFilter {
        &self.map_year
    }

    /// The color scale used for map buckets.
    #[must_use]
    pub const fn color_scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Per-district counts for `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MapUnavailable`] if the boundaries failed to
    /// load.
    pub fn district_counts(&self, scope: &YearFilter) -> Result<Vec<FeatureCount>, SessionError> {
        if let Some(message) = &self.map_error {
            return Err(SessionError::MapUnavailable {
                message: message.clone(),
            });
        }
        Ok(district_counts(
            &self.records,
            &self.boundaries,
            scope,
            &self.scale,
        ))
    }

    /// Whole-dataset summary.
    #[must_use]
    pub fn summary(&self) -> Summary {
        summarize(&self.records)
    }

    /// The configured circle grid.
    #[must_use]
    pub fn circle_grid(&self) -> Vec<CircleKind> {
        circle_grid(self.summary.baseline, self.summary.total)
    }
}
