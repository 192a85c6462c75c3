//! Internal link discovery
//!
//! Parses a page's anchors and returns the same-branch neighbors the crawl may
//! visit next. A candidate qualifies only if it resolves against the page URL,
//! its host equals the page's host, and its absolute string starts with the
//! exact page-URL string. Malformed hrefs are skipped without failing the page.

use crate::extract::ANCHOR_SELECTOR;
use scraper::Html;
use std::collections::HashSet;
use url::Url;

/// Discovers up to `max_links` unique internal link candidates in document order
///
/// # Arguments
///
/// * `html` - The page's raw markup
/// * `page_url` - The URL the page was fetched from, used as resolution base
/// * `max_links` - Upper bound on returned candidates
pub fn discover_links(html: &str, page_url: &Url, max_links: usize) -> Vec<Url> {
    let document = Html::parse_document(html);
    let page_str = page_url.as_str();

    let mut seen: HashSet<String> = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        if links.len() >= max_links {
            break;
        }

        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let resolved = match page_url.join(href.trim()) {
            Ok(url) => url,
            Err(_) => continue,
        };

        // Same host, and confined to the same path branch as the page itself
        match (resolved.host_str(), page_url.host_str()) {
            (Some(a), Some(b)) if a == b => {}
            _ => continue,
        }
        if !resolved.as_str().starts_with(page_str) {
            continue;
        }

        if seen.insert(resolved.as_str().to_string()) {
            links.push(resolved);
        }
    }

    links
}
