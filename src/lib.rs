// src/lib.rs
// =============================================================================
// link-sentry: crawl a website and find its broken internal links.
//
// This is the library behind the link-sentry binary. The simplest entry
// point is the `scan` function:
//
//     let report = link_sentry::scan("https://example.com", timeout).await?;
//     println!("{} broken links", report.broken_links().len());
//
// Build a `Crawler` directly to watch results live or to make the scan
// cancellable.
//
// Modules:
// - crawl: URL normalization, link extraction, and the crawl engine
// - fetch: the PageFetcher trait and its reqwest-backed implementation
// - report: the CrawlResult and ScanReport data model
// - export: CSV serialization of broken links
// - error: the one error a scan can fail with
// =============================================================================

pub mod crawl;
pub mod error;
pub mod export;
pub mod fetch;
pub mod report;

// Re-export the public API at the crate root
pub use crawl::{extract_links, normalize_url, scan, Crawler, ResultObserver};
pub use error::InvalidUrlError;
pub use export::export_csv;
pub use fetch::{FetchError, FetchErrorKind, FetchedPage, HttpFetcher, PageFetcher};
pub use report::{CrawlResult, ScanReport};
