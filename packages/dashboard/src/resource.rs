//! Multi-candidate resource loading.
//!
//! Each input resource has an ordered list of candidate locations. They
//! are tried one at a time; the first that yields non-empty text wins and
//! individual failures are only logged. When every candidate fails the
//! caller gets a single [`LoadError::Unavailable`].

use std::future::Future;
use std::path::{Path, PathBuf};

use strum_macros::{AsRefStr, Display};
use thiserror::Error;

/// The two inputs the dashboard needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Resource {
    /// Delimited incident text.
    IncidentCsv,
    /// District boundary feature collection.
    Boundaries,
}

impl Resource {
    /// Fixed message shown when no candidate location worked.
    #[must_use]
    pub const fn unavailable_message(self) -> &'static str {
        match self {
            Self::IncidentCsv => "Could not load incident CSV data",
            Self::Boundaries => "Could not load district boundary data",
        }
    }
}

/// Errors that can occur while loading a resource.
#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading a local file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The location answered but had nothing in it.
    #[error("{location} returned empty content")]
    Empty {
        /// The location that was tried.
        location: String,
    },

    /// Every candidate location failed.
    #[error("{}", resource.unavailable_message())]
    Unavailable {
        /// Which resource could not be loaded.
        resource: Resource,
    },
}

/// Where a candidate resource lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocation {
    /// Remote `http(s)` URL.
    Url(reqwest::Url),
    /// Local file.
    Path(PathBuf),
}

impl ResourceLocation {
    /// Interprets a configured candidate string.
    ///
    /// Strings starting with `http://` or `https://` that parse as URLs are
    /// remote; everything else is a file path, joined onto `base_dir` when
    /// relative.
    #[must_use]
    pub fn parse(candidate: &str, base_dir: Option<&Path>) -> Self {
        let candidate = candidate.trim();
        let lower = candidate.to_ascii_lowercase();
        if (lower.starts_with("http://") || lower.starts_with("https://"))
            && let Ok(url) = reqwest::Url::parse(candidate)
        {
            return Self::Url(url);
        }

        let path = PathBuf::from(candidate);
        match base_dir {
            Some(base) if path.is_relative() => Self::Path(base.join(path)),
            _ => Self::Path(path),
        }
    }
}

impl std::fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Tries `attempt` on each candidate in order and returns the first
/// success.
///
/// Failures are logged at debug level and otherwise dropped. Returns
/// `None` when the candidates are exhausted.
pub async fn first_success<C, T, E, F, Fut>(candidates: C, mut attempt: F) -> Option<T>
where
    C: IntoIterator,
    C::Item: std::fmt::Display,
    E: std::fmt::Display,
    F: FnMut(C::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    for candidate in candidates {
        let label = candidate.to_string();
        match attempt(candidate).await {
            Ok(value) => {
                log::debug!("Loaded {label}");
                return Some(value);
            }
            Err(e) => log::debug!("Candidate {label} failed: {e}"),
        }
    }
    None
}

/// Reads one location as text.
///
/// # Errors
///
/// Returns [`LoadError`] if the request or read fails, the server answers
/// with an error status, or the content is blank.
pub async fn fetch_text(
    client: &reqwest::Client,
    location: &ResourceLocation,
) -> Result<String, LoadError> {
    let text = match location {
        ResourceLocation::Url(url) => {
            client
                .get(url.clone())
                .header(reqwest::header::CACHE_CONTROL, "no-store")
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?
        }
        ResourceLocation::Path(path) => tokio::fs::read_to_string(path).await?,
    };

    if text.trim().is_empty() {
        return Err(LoadError::Empty {
            location: location.to_string(),
        });
    }

    Ok(text)
}

/// Loads `resource` from the first candidate that yields non-empty text.
///
/// # Errors
///
/// Returns [`LoadError::Unavailable`] when every candidate fails.
pub async fn load_resource(
    client: &reqwest::Client,
    resource: Resource,
    candidates: &[String],
    base_dir: Option<&Path>,
) -> Result<String, LoadError> {
    let locations: Vec<ResourceLocation> = candidates
        .iter()
        .map(|c| ResourceLocation::parse(c, base_dir))
        .collect();

    let text = first_success(&locations, |location| fetch_text(client, location)).await;

    match text {
        Some(text) => {
            log::info!("Loaded {resource} ({} bytes)", text.len());
            Ok(text)
        }
        None => {
            log::warn!(
                "{} after trying {} locations",
                resource.unavailable_message(),
                locations.len()
            );
            Err(LoadError::Unavailable { resource })
        }
    }
}
