// src/crawl/mod.rs
// =============================================================================
// This module owns the crawl itself.
//
// Pieces:
// - url: validates and normalizes the seed URL
// - extract: pulls same-domain links out of fetched HTML
// - engine: the breadth-first traversal that ties them together
//
// The traversal never leaves the seed URL's host and visits every reachable
// page exactly once.
// =============================================================================

mod engine;
mod extract;
mod url;

// Re-export the crawl entry points
pub use engine::{scan, Crawler, ResultObserver};
pub use extract::extract_links;
pub use url::normalize_url;
