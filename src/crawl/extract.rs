// src/crawl/extract.rs
// =============================================================================
// Same-domain link extraction.
//
// Takes the HTML body of a fetched page and returns every URL its anchor
// tags point to on the same host, as absolute fragment-free strings. The
// function is pure: malformed markup is parsed best-effort and anything
// unresolvable is silently skipped, never reported.
// =============================================================================

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

/// Extracts all same-domain links from an HTML document.
///
/// Parameters:
///   html: the page body to parse
///   page_url: the URL the page was fetched from, used to resolve relative
///     hrefs
///   site_host: the seed URL's host; only links whose host matches it
///     exactly are kept (a subdomain is a different host)
///
/// Returns absolute URLs with fragments stripped, deduplicated, in document
/// order.
pub fn extract_links(html: &str, page_url: &str, site_host: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    // Without a valid page URL there is no way to resolve relative hrefs.
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => return links,
    };

    let document = Html::parse_document(html);

    // "a[href]" is a constant selector and known to be valid.
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        let href = match element.value().attr("href") {
            Some(href) => href,
            None => continue,
        };

        // Resolve first, then strip the fragment. A fragment-only href like
        // "#top" must collapse into the page itself, not survive as a
        // distinct entry.
        let mut resolved = match base.join(href) {
            Ok(url) => url,
            Err(_) => continue,
        };
        resolved.set_fragment(None);

        // Hosts must match the seed byte for byte. Links to other hosts and
        // hostless schemes such as mailto: are dropped here.
        if resolved.host_str() != Some(site_host) {
            continue;
        }

        let resolved = resolved.to_string();
        if seen.insert(resolved.clone()) {
            links.push(resolved);
        }
    }

    links
}
