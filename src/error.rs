// src/error.rs
// =============================================================================
// Error types for the link-sentry library.
//
// Only seed validation can fail a scan as a whole. Everything that goes wrong
// while visiting an individual page is recorded as data inside that page's
// CrawlResult instead of being raised, so this file defines the one error
// that does escape.
// =============================================================================

use thiserror::Error;

/// Returned when the seed URL cannot be turned into a valid absolute
/// http(s) URL. Raised before any network activity happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidUrlError {
    /// The input parsed but has no host component (e.g. "https://").
    #[error("Missing domain: {0}")]
    MissingDomain(String),

    /// The input uses a scheme other than http or https (e.g. "ftp://...").
    #[error("URL must use http or https: {0}")]
    UnsupportedScheme(String),

    /// The input could not be parsed as a URL at all.
    #[error("Invalid URL '{url}': {source}")]
    Unparseable {
        url: String,
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_input() {
        let err = InvalidUrlError::MissingDomain("https://".to_string());
        assert_eq!(err.to_string(), "Missing domain: https://");

        let err = InvalidUrlError::UnsupportedScheme("ftp://example.com".to_string());
        assert_eq!(err.to_string(), "URL must use http or https: ftp://example.com");
    }
}
