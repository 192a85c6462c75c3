//! Snapshot persistence for finalized crawl records
//!
//! A crawl produces exactly one record, written once after the traversal
//! finishes. Snapshots are keyed by the seed URL's host: a later crawl of the
//! same host overwrites the previous snapshot rather than appending to it.

mod json_store;

pub use json_store::JsonSnapshotStore;

use crate::crawler::CrawlResult;
use std::path::PathBuf;
use thiserror::Error;

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Cannot derive snapshot key, URL has no host: {0}")]
    MissingHost(String),
}

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// A sink for finalized crawl records
pub trait SnapshotStore {
    /// Persists the record, returning the path it was written to
    fn save(&self, result: &CrawlResult) -> StorageResult<PathBuf>;
}
