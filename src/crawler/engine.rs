//! Crawl traversal engine
//!
//! Owns the visited set and the FIFO work queue for one crawl. The queue is
//! seeded with exactly the seed URL; only the seed page's discovered links are
//! ever appended, so a crawl performs at most `1 + max_links` fetches. This is
//! a deliberate special case, not a depth-limited BFS: discovered pages are
//! fetched and mined for facts but never expanded further.

use crate::config::CrawlerConfig;
use crate::crawler::aggregator::{Aggregator, CrawlResult};
use crate::crawler::discoverer::discover_links;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::extract::extract_page_facts;
use crate::SweepError;
use reqwest::Client;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Traversal engine for a single crawl
pub struct CrawlEngine {
    client: Client,
    max_links: usize,
}

impl CrawlEngine {
    pub fn new(client: Client, max_links: usize) -> Self {
        Self { client, max_links }
    }

    /// Runs the crawl to completion and returns the aggregated record
    ///
    /// Per-page fetch failures are absorbed: the page is marked visited with
    /// zero contributed facts and the loop continues. The crawl always runs
    /// until the queue is empty.
    pub async fn run(&self, seed: &Url) -> CrawlResult {
        let seed_str = seed.as_str().to_string();

        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        let mut aggregator = Aggregator::new();

        queue.push_back(seed_str.clone());

        while let Some(current) = queue.pop_front() {
            // Duplicates are tolerated at enqueue time and filtered here
            if !visited.insert(current.clone()) {
                continue;
            }

            tracing::debug!("Fetching {}", current);
            match fetch_url(&self.client, &current).await {
                FetchResult::Success { body } => {
                    aggregator.merge(extract_page_facts(&body));

                    // Only the seed page is expanded
                    if current == seed_str {
                        let links = discover_links(&body, seed, self.max_links);
                        tracing::debug!("Discovered {} internal links", links.len());
                        for link in links {
                            queue.push_back(String::from(link));
                        }
                    }
                }
                FetchResult::Failed { reason } => {
                    tracing::warn!("Failed to fetch {}: {}", current, reason);
                }
            }
        }

        tracing::info!("Crawl of {} visited {} pages", seed_str, visited.len());
        aggregator.finalize(&seed_str)
    }
}

/// Runs a complete crawl for one seed URL
///
/// This is the main library entry point. It validates the seed, builds the
/// HTTP client from the crawler configuration, and drives the engine until the
/// work queue is empty.
///
/// # Arguments
///
/// * `seed` - The seed URL supplied by the caller
/// * `config` - Crawler configuration (link bound, timeout, user agent)
///
/// # Returns
///
/// * `Ok(CrawlResult)` - The deduplicated record for the whole crawl
/// * `Err(SweepError)` - The seed was missing or malformed, or the HTTP
///   client could not be built; no fetch is attempted in either case
pub async fn run_crawl(seed: &str, config: &CrawlerConfig) -> crate::Result<CrawlResult> {
    let seed = seed.trim();
    if seed.is_empty() {
        return Err(SweepError::InvalidSeed {
            url: seed.to_string(),
            reason: "URL is required".to_string(),
        });
    }

    let seed_url = Url::parse(seed).map_err(|e| SweepError::InvalidSeed {
        url: seed.to_string(),
        reason: e.to_string(),
    })?;

    let client = build_http_client(&config.user_agent, config.request_timeout_secs)?;
    let engine = CrawlEngine::new(client, config.max_links);
    Ok(engine.run(&seed_url).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_seed_rejected_before_any_fetch() {
        let config = CrawlerConfig::default();
        let result = run_crawl("", &config).await;
        assert!(matches!(result, Err(SweepError::InvalidSeed { .. })));

        let result = run_crawl("   ", &config).await;
        assert!(matches!(result, Err(SweepError::InvalidSeed { .. })));
    }

    #[tokio::test]
    async fn test_malformed_seed_rejected() {
        let config = CrawlerConfig::default();
        let result = run_crawl("not a url", &config).await;
        assert!(matches!(result, Err(SweepError::InvalidSeed { .. })));
    }
}
