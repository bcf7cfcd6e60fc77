// src/crawl/url.rs
// =============================================================================
// Seed URL validation and normalization.
//
// Raw user input ("example.com", "https://example.com") becomes a validated
// absolute http(s) Url, or an InvalidUrlError saying what was wrong with it.
// Links discovered during the crawl never pass through here; extraction
// resolves those against the page they were found on.
// =============================================================================

use url::{ParseError, Url};

use crate::error::InvalidUrlError;

/// Validates `raw` and normalizes it to an absolute http(s) URL.
///
/// Input without a scheme is retried with "https://" prepended, so a bare
/// hostname like "example.com" is accepted. The returned Url is the
/// crawler's identity for the site: its host decides which links are
/// internal.
pub fn normalize_url(raw: &str) -> Result<Url, InvalidUrlError> {
    let parsed = match Url::parse(raw) {
        Ok(url) => Ok(url),
        // No scheme present: assume https and try again.
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{}", raw)),
        Err(error) => Err(error),
    };

    let url = match parsed {
        Ok(url) => url,
        Err(ParseError::EmptyHost) => {
            return Err(InvalidUrlError::MissingDomain(raw.to_string()));
        }
        Err(source) => {
            return Err(InvalidUrlError::Unparseable {
                url: raw.to_string(),
                source,
            });
        }
    };

    // Host before scheme: "localhost:8080" parses with "localhost" as the
    // scheme and no host at all, and should read as a missing domain.
    if url.host_str().map_or(true, str::is_empty) {
        return Err(InvalidUrlError::MissingDomain(raw.to_string()));
    }

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(InvalidUrlError::UnsupportedScheme(raw.to_string()));
    }

    Ok(url)
}
