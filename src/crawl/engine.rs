// src/crawl/engine.rs
// =============================================================================
// The crawl engine.
//
// Owns the traversal: a FIFO frontier of URLs waiting to be fetched, a
// membership set so nothing is queued twice, and a visited set so nothing is
// fetched twice. One URL is in flight at a time, and whatever happens to it
// becomes exactly one CrawlResult in the report.
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::crawl::extract::extract_links;
use crate::crawl::url::normalize_url;
use crate::error::InvalidUrlError;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::report::{CrawlResult, ScanReport};

/// Callback invoked once per visited URL, right after its result is recorded.
pub type ResultObserver = Box<dyn FnMut(&CrawlResult) + Send>;

/// Website crawler for detecting broken links.
///
/// Construction validates the seed URL; `scan` does the traversal. The
/// fetcher is generic so tests can drive the engine with scripted responses.
pub struct Crawler<F: PageFetcher = HttpFetcher> {
    base_url: Url,
    site_host: String,
    fetcher: F,
    on_result: Option<ResultObserver>,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl Crawler<HttpFetcher> {
    /// Creates a crawler for `base_url` whose requests time out after
    /// `timeout`.
    ///
    /// Fails with InvalidUrlError when the seed does not normalize. This is
    /// the only error the engine ever surfaces; everything later is data in
    /// the report.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, InvalidUrlError> {
        Self::with_fetcher(base_url, HttpFetcher::new(timeout))
    }
}

impl<F: PageFetcher> Crawler<F> {
    /// Creates a crawler that fetches pages through `fetcher`.
    pub fn with_fetcher(base_url: &str, fetcher: F) -> Result<Self, InvalidUrlError> {
        let base_url = normalize_url(base_url)?;
        let site_host = base_url
            .host_str()
            .map(str::to_string)
            .ok_or_else(|| InvalidUrlError::MissingDomain(base_url.to_string()))?;

        Ok(Crawler {
            base_url,
            site_host,
            fetcher,
            on_result: None,
            cancel_flag: None,
        })
    }

    /// The normalized seed URL this crawler starts from.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Registers a callback that sees every result as soon as it is
    /// recorded. Useful for live progress output.
    pub fn on_result(mut self, observer: ResultObserver) -> Self {
        self.on_result = Some(observer);
        self
    }

    /// Shares a flag that, once set, stops the scan before the next fetch.
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }

    /// Crawls the site and reports every visited URL.
    ///
    /// The traversal is breadth-first from the seed and never leaves the
    /// seed's host. This always returns a report: per-page failures are
    /// recorded inside their CrawlResult, and cancellation just ends the
    /// walk early with whatever has been collected so far.
    pub async fn scan(&mut self) -> ScanReport {
        let seed = self.base_url.to_string();

        let mut frontier: VecDeque<String> = VecDeque::new();
        let mut queued: HashSet<String> = HashSet::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut results: Vec<CrawlResult> = Vec::new();

        frontier.push_back(seed.clone());
        queued.insert(seed.clone());

        while let Some(url) = frontier.pop_front() {
            if self.is_cancelled() {
                debug!("cancellation requested, stopping the scan");
                break;
            }

            // A URL can sit in the frontier only once, but guard anyway so
            // re-visits are impossible no matter how it got queued.
            if !visited.insert(url.clone()) {
                continue;
            }

            let result = self
                .visit(&url, &mut frontier, &mut queued, &visited)
                .await;

            results.push(result);
            if let Some(observer) = self.on_result.as_mut() {
                if let Some(result) = results.last() {
                    observer(result);
                }
            }
        }

        ScanReport {
            base_url: seed,
            results,
        }
    }

    /// Fetches one URL, records its outcome, and queues any newly discovered
    /// same-domain links.
    async fn visit(
        &self,
        url: &str,
        frontier: &mut VecDeque<String>,
        queued: &mut HashSet<String>,
        visited: &HashSet<String>,
    ) -> CrawlResult {
        match self.fetcher.fetch(url).await {
            Ok(page) => {
                debug!(url = %url, status = page.status_code, "page fetched");

                // Only HTML bodies carry links worth following. The status
                // code does not matter here: a 404 page that serves HTML
                // gets its links followed like any other page.
                if page.is_html() {
                    let links = extract_links(&page.body, url, &self.site_host);
                    debug!(url = %url, count = links.len(), "links discovered");

                    for link in links {
                        if !visited.contains(&link) && queued.insert(link.clone()) {
                            frontier.push_back(link);
                        }
                    }
                }

                CrawlResult {
                    url: url.to_string(),
                    status_code: page.status_code,
                    error: None,
                }
            }
            Err(failure) => {
                warn!(url = %url, error = %failure, "fetch failed");

                CrawlResult {
                    url: url.to_string(),
                    status_code: 0,
                    error: Some(failure),
                }
            }
        }
    }
}

/// Scans a website for broken links.
///
/// The one-call API: validates `url`, crawls every reachable page on its
/// host with the given per-request timeout, and returns the full report.
pub async fn scan(url: &str, timeout: Duration) -> Result<ScanReport, InvalidUrlError> {
    let mut crawler = Crawler::new(url, timeout)?;
    Ok(crawler.scan().await)
}
