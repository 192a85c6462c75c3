//! HTTP fetcher implementation
//!
//! Thin wrapper around reqwest used by the traversal engine. The engine does
//! not distinguish failure causes: timeouts, connection errors, and
//! non-success status codes all collapse to a single failed outcome carrying a
//! human-readable reason for the log.

use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page body
    Success {
        /// Page body content
        body: String,
    },

    /// The page is unreachable for this crawl; it contributes no facts
    Failed {
        /// Failure description, for logging only
        reason: String,
    },
}

/// Builds the HTTP client used for all crawl fetches
///
/// Redirects follow reqwest's default policy, so a 3xx chain resolves to its
/// final page before the status check.
///
/// # Arguments
///
/// * `user_agent` - User agent string sent with every request
/// * `timeout_secs` - Per-request timeout in seconds
pub fn build_http_client(user_agent: &str, timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one URL, collapsing every failure mode into `FetchResult::Failed`
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                return FetchResult::Failed {
                    reason: format!("HTTP {}", status.as_u16()),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success { body },
                Err(e) => FetchResult::Failed {
                    reason: format!("Body read failed: {}", e),
                },
            }
        }
        Err(e) => {
            let reason = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection failed".to_string()
            } else {
                e.to_string()
            };
            FetchResult::Failed { reason }
        }
    }
}
