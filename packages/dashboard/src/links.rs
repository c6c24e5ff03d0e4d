//! News source link sanitizing.

use mob_map_incident_models::IncidentRecord;

/// Shown when a record has no usable source link.
pub const NO_SOURCES: &str = "N/A";

/// Returns the normalized URL if `raw` is an absolute `http` or `https`
/// URL. Anything else (blank, relative, `javascript:`, unparseable) is
/// dropped.
#[must_use]
pub fn safe_source_url(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    let url = reqwest::Url::parse(value).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

/// Usable source links for a record, in column order.
#[must_use]
pub fn source_links(record: &IncidentRecord) -> Vec<String> {
    record
        .source_urls()
        .into_iter()
        .filter_map(safe_source_url)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_http_and_https() {
        assert_eq!(
            safe_source_url(" https://news.example/a?b=1 ").as_deref(),
            Some("https://news.example/a?b=1")
        );
        assert_eq!(
            safe_source_url("http://news.example").as_deref(),
            Some("http://news.example/")
        );
    }

    #[test]
    fn drops_other_schemes_and_garbage() {
        for raw in ["", "   ", "javascript:alert(1)", "ftp://x.example", "news.example/a", "N/A"] {
            assert_eq!(safe_source_url(raw), None, "url {raw:?}");
        }
    }

    #[test]
    fn collects_links_in_column_order() {
        let record = IncidentRecord {
            source_url_1: "mailto:someone@example.com".to_string(),
            source_url_2: "https://two.example/".to_string(),
            ..IncidentRecord::default()
        };
        assert_eq!(source_links(&record), vec!["https://two.example/"]);
        assert!(source_links(&IncidentRecord::default()).is_empty());
    }
}
