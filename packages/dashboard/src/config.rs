//! Dashboard configuration.
//!
//! A default configuration is embedded at compile time from
//! `config/default.toml`. A file passed with `--config` replaces it
//! entirely; omitted sections fall back to their defaults.

use std::path::{Path, PathBuf};

use mob_map_incident_models::YearFilter;
use serde::Deserialize;
use thiserror::Error;

/// The embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`DashboardConfig`].
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file parsed but a value is unusable.
    #[error("Invalid config: {message}")]
    Invalid {
        /// Description of the offending value.
        message: String,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Where to find the two input resources.
    pub sources: SourcesConfig,
    /// Incident table settings.
    #[serde(default)]
    pub table: TableConfig,
    /// Choropleth settings.
    #[serde(default)]
    pub map: MapConfig,
    /// Circle-grid summary settings.
    #[serde(default)]
    pub summary: SummaryConfig,
}

/// Candidate locations for the input resources, tried in order.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Incident CSV locations (paths or `http(s)` URLs).
    pub csv: Vec<String>,
    /// Boundary `GeoJSON` locations (paths or `http(s)` URLs).
    pub boundaries: Vec<String>,
    /// Directory relative paths resolve against.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Single-character field delimiter for the CSV.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

/// Incident table settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    /// Rows per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Selectable year filters, in display order.
    #[serde(default = "default_filters")]
    pub filters: Vec<YearFilter>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            filters: default_filters(),
        }
    }
}

/// Choropleth settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MapConfig {
    /// Year scope the map shows by default.
    #[serde(default = "default_map_year")]
    pub year: YearFilter,
    /// Counts at or above this value get the darkest color.
    #[serde(default = "default_max_count")]
    pub max_count: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            year: default_map_year(),
            max_count: default_max_count(),
        }
    }
}

/// Circle-grid settings: `total` circles, the first `baseline` drawn as
/// the baseline and the rest as the increase.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SummaryConfig {
    /// Circles in the baseline color.
    #[serde(default = "default_baseline")]
    pub baseline: usize,
    /// Total circles.
    #[serde(default = "default_total")]
    pub total: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            total: default_total(),
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

const fn default_page_size() -> usize {
    10
}

fn default_filters() -> Vec<YearFilter> {
    ["all", "2023", "2025"]
        .into_iter()
        .map(YearFilter::parse)
        .collect()
}

fn default_map_year() -> YearFilter {
    YearFilter::parse("2025")
}

const fn default_max_count() -> u64 {
    10
}

const fn default_baseline() -> usize {
    38
}

const fn default_total() -> usize {
    139
}

impl DashboardConfig {
    /// Returns the embedded default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the embedded file fails to parse or
    /// validate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or
    /// validated.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML or fails
    /// [`Self::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::de::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the dashboard cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.csv.is_empty() {
            return Err(invalid("sources.csv must list at least one location"));
        }
        if self.sources.boundaries.is_empty() {
            return Err(invalid("sources.boundaries must list at least one location"));
        }
        self.delimiter()?;
        if self.table.page_size == 0 {
            return Err(invalid("table.page_size must be at least 1"));
        }
        if self.table.filters.is_empty() {
            return Err(invalid("table.filters must not be empty"));
        }
        if self.map.max_count == 0 {
            return Err(invalid("map.max_count must be at least 1"));
        }
        if self.summary.baseline > self.summary.total {
            return Err(invalid("summary.baseline must not exceed summary.total"));
        }
        Ok(())
    }

    /// The CSV delimiter as a byte.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] unless the delimiter is exactly one
    /// ASCII character.
    pub fn delimiter(&self) -> Result<u8, ConfigError> {
        match self.sources.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(invalid(&format!(
                "sources.delimiter must be one ASCII character, got {:?}",
                self.sources.delimiter
            ))),
        }
    }
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Invalid {
        message: message.to_string(),
    }
}
