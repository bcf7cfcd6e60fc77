// src/report.rs
// =============================================================================
// Data model for scan results.
//
// CrawlResult records what happened to exactly one URL; ScanReport collects
// every outcome of a single scan in visitation order. Both are plain data
// holding primitives, so a report stays readable long after the crawler that
// produced it is gone.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::fetch::FetchError;

/// Outcome of visiting a single URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlResult {
    /// The absolute URL that was visited (normalized, fragment-free).
    pub url: String,
    /// HTTP status code, or 0 when no response was obtained at all.
    pub status_code: u16,
    /// Transport failure, present only when no status code was obtained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FetchError>,
}

impl CrawlResult {
    /// True when the page responded with HTTP 404.
    pub fn is_broken(&self) -> bool {
        self.status_code == 404
    }

    /// True when the fetch failed before any status code arrived.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Complete report of one site scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// The normalized seed URL the scan started from.
    pub base_url: String,
    /// One entry per visited URL, in the order they were visited.
    pub results: Vec<CrawlResult>,
}

impl ScanReport {
    /// Total number of URLs visited.
    pub fn total_scanned(&self) -> usize {
        self.results.len()
    }

    /// Every result that came back 404.
    pub fn broken_links(&self) -> Vec<&CrawlResult> {
        self.results.iter().filter(|r| r.is_broken()).collect()
    }

    /// Every result whose fetch failed without producing a status code.
    pub fn errors(&self) -> Vec<&CrawlResult> {
        self.results.iter().filter(|r| r.is_error()).collect()
    }

    /// Every result that is neither broken nor a fetch failure.
    pub fn successful(&self) -> Vec<&CrawlResult> {
        self.results
            .iter()
            .filter(|r| !r.is_broken() && !r.is_error())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchError, FetchErrorKind};

    fn result(url: &str, status_code: u16) -> CrawlResult {
        CrawlResult {
            url: url.to_string(),
            status_code,
            error: None,
        }
    }

    fn failed(url: &str, message: &str) -> CrawlResult {
        CrawlResult {
            url: url.to_string(),
            status_code: 0,
            error: Some(FetchError {
                kind: FetchErrorKind::Connect,
                message: message.to_string(),
            }),
        }
    }

    #[test]
    fn test_is_broken_only_for_404() {
        assert!(result("https://example.com/missing", 404).is_broken());
        assert!(!result("https://example.com/", 200).is_broken());
        assert!(!result("https://example.com/gone", 410).is_broken());
        assert!(!result("https://example.com/boom", 500).is_broken());
    }

    #[test]
    fn test_is_error_tracks_the_error_field() {
        assert!(failed("https://example.com/", "Connection refused").is_error());
        assert!(!result("https://example.com/", 200).is_error());
        // A 404 is a valid HTTP response, not a fetch failure.
        assert!(!result("https://example.com/missing", 404).is_error());
    }

    #[test]
    fn test_report_partitions_results() {
        let report = ScanReport {
            base_url: "https://example.com/".to_string(),
            results: vec![
                result("https://example.com/", 200),
                result("https://example.com/missing", 404),
                failed("https://example.com/slow", "Request timed out"),
                result("https://example.com/about", 200),
                result("https://example.com/old", 404),
            ],
        };

        assert_eq!(report.total_scanned(), 5);
        assert_eq!(report.broken_links().len(), 2);
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.successful().len(), 2);

        let broken: Vec<&str> = report
            .broken_links()
            .iter()
            .map(|r| r.url.as_str())
            .collect();
        assert_eq!(
            broken,
            vec!["https://example.com/missing", "https://example.com/old"]
        );
    }

    #[test]
    fn test_empty_report() {
        let report = ScanReport {
            base_url: "https://example.com/".to_string(),
            results: Vec::new(),
        };
        assert_eq!(report.total_scanned(), 0);
        assert!(report.broken_links().is_empty());
        assert!(report.errors().is_empty());
        assert!(report.successful().is_empty());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = ScanReport {
            base_url: "https://example.com/".to_string(),
            results: vec![result("https://example.com/", 200)],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"base_url\":\"https://example.com/\""));
        assert!(json.contains("\"status_code\":200"));
        // The error field is omitted when there is no error.
        assert!(!json.contains("\"error\""));
    }
}
