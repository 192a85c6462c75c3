//! Result aggregation
//!
//! Maintains running unions of per-page fact sets for one crawl and produces
//! the final record once traversal is done. Merging is set union, so it is
//! commutative and idempotent: contributing the same facts twice changes
//! nothing.

use crate::extract::{PageFacts, Platform};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Accumulates fact sets across all pages of one crawl
#[derive(Debug)]
pub struct Aggregator {
    emails: HashSet<String>,
    phones: HashSet<String>,
    socials: BTreeMap<Platform, HashSet<String>>,
}

/// The deduplicated output record for one whole crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    pub url: String,
    pub emails: HashSet<String>,
    pub phone_numbers: HashSet<String>,
    pub socials: BTreeMap<Platform, HashSet<String>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            emails: HashSet::new(),
            phones: HashSet::new(),
            socials: Platform::ALL
                .iter()
                .map(|p| (*p, HashSet::new()))
                .collect(),
        }
    }

    /// Merges one page's facts into the running unions
    pub fn merge(&mut self, facts: PageFacts) {
        self.emails.extend(facts.emails);
        self.phones.extend(facts.phones);
        for (platform, urls) in facts.socials {
            self.socials.entry(platform).or_default().extend(urls);
        }
    }

    /// Finalizes the crawl into its output record, keyed by the seed URL
    pub fn finalize(self, seed_url: &str) -> CrawlResult {
        CrawlResult {
            url: seed_url.to_string(),
            emails: self.emails,
            phone_numbers: self.phones,
            socials: self.socials,
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
