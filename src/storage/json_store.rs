//! JSON file snapshot store
//!
//! Writes one pretty-printed JSON file per crawled host into the configured
//! data directory, creating the directory on first use. The file name is
//! `scrape_results_<host>.json` with dots in the host replaced by underscores.

use crate::crawler::CrawlResult;
use crate::storage::{SnapshotStore, StorageError, StorageResult};
use std::path::PathBuf;
use url::Url;

/// Snapshot store backed by per-host JSON files
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    data_dir: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Derives the snapshot file name for a seed URL
    fn snapshot_path(&self, seed_url: &str) -> StorageResult<PathBuf> {
        let host = Url::parse(seed_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .ok_or_else(|| StorageError::MissingHost(seed_url.to_string()))?;

        let file_name = format!("scrape_results_{}.json", host.replace('.', "_"));
        Ok(self.data_dir.join(file_name))
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn save(&self, result: &CrawlResult) -> StorageResult<PathBuf> {
        let path = self.snapshot_path(&result.url)?;

        std::fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(result)?;
        std::fs::write(&path, json)?;

        tracing::debug!("Snapshot written to {}", path.display());
        Ok(path)
    }
}
