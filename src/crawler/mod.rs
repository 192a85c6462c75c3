//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with a uniform failure outcome
//! - Internal link discovery (same host, same path branch)
//! - The bounded traversal engine
//! - Aggregation of per-page facts into the final record

mod aggregator;
mod discoverer;
mod engine;
mod fetcher;

pub use aggregator::{Aggregator, CrawlResult};
pub use discoverer::discover_links;
pub use engine::{run_crawl, CrawlEngine};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
