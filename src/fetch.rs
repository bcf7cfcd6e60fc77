// src/fetch.rs
// =============================================================================
// HTTP fetching for the crawler.
//
// The engine talks to the network through the PageFetcher trait so the crawl
// logic can be exercised against scripted responses in tests. HttpFetcher is
// the production implementation: one reqwest client, built once with the
// configured timeout and reused for every request.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// What a fetch failure fundamentally was, classified from the transport
/// error so callers can match on it instead of scraping message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// The request exceeded the configured timeout.
    Timeout,
    /// A TCP connection could not be established.
    Connect,
    /// The hostname did not resolve.
    Dns,
    /// Anything else (TLS failures, invalid responses, ...).
    Other,
}

/// A failed page fetch. No HTTP status code was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    /// The transport's own description, kept verbatim for display.
    pub message: String,
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        // Convert the error to a string once; classification below peeks at it.
        let message = error.to_string();

        let kind = if error.is_timeout() {
            FetchErrorKind::Timeout
        } else if error.is_connect() {
            // Connection errors often mean DNS issues or host unreachable
            if message.contains("dns") {
                FetchErrorKind::Dns
            } else {
                FetchErrorKind::Connect
            }
        } else {
            FetchErrorKind::Other
        };

        FetchError { kind, message }
    }
}

/// A successfully fetched page. A status code was obtained, whatever it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status_code: u16,
    /// Value of the Content-Type header, if the response carried one.
    pub content_type: Option<String>,
    pub body: String,
}

impl FetchedPage {
    /// True when the Content-Type header marks the body as an HTML document.
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .map_or(false, |ct| ct.contains("html"))
    }
}

/// Fetches one URL. Implemented by the real HTTP client and by test doubles.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Production fetcher backed by reqwest.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher whose requests all time out after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("link-sentry/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        HttpFetcher { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        // A failed body read after the status arrived counts as an empty
        // body, not as a fetch failure.
        let body = match response.text().await {
            Ok(text) => text,
            Err(error) => {
                debug!(url = %url, error = %error, "failed to read response body");
                String::new()
            }
        };

        Ok(FetchedPage {
            status_code,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(content_type: Option<&str>) -> FetchedPage {
        FetchedPage {
            status_code: 200,
            content_type: content_type.map(|ct| ct.to_string()),
            body: String::new(),
        }
    }

    #[test]
    fn test_is_html_accepts_html_content_types() {
        assert!(page(Some("text/html")).is_html());
        assert!(page(Some("text/html; charset=utf-8")).is_html());
        assert!(page(Some("application/xhtml+xml")).is_html());
    }

    #[test]
    fn test_is_html_rejects_everything_else() {
        assert!(!page(Some("application/pdf")).is_html());
        assert!(!page(Some("image/png")).is_html());
        assert!(!page(None).is_html());
    }

    #[test]
    fn test_fetch_error_displays_its_message() {
        let error = FetchError {
            kind: FetchErrorKind::Timeout,
            message: "Request timed out".to_string(),
        };
        assert_eq!(error.to_string(), "Request timed out");
    }

    #[test]
    fn test_fetch_error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FetchErrorKind::Timeout).unwrap();
        assert_eq!(json, "\"timeout\"");
    }
}
