use serde::Deserialize;

/// Main configuration structure for Contact-Sweep
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub server: ServerConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of internal links expanded from the seed page
    #[serde(rename = "max-links")]
    pub max_links: usize,

    /// Per-request fetch timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// User agent string sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_links: 5,
            request_timeout_secs: 10,
            user_agent: format!("contact-sweep/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API listens on
    #[serde(rename = "bind-address")]
    pub bind_address: String,

    /// Accepted `x-api-key` values; empty list disables the check
    #[serde(rename = "api-keys")]
    pub api_keys: Vec<String>,

    /// Allowed CORS origin ("*" for any)
    #[serde(rename = "cors-origin")]
    pub cors_origin: String,

    /// Per-client request budget per minute
    #[serde(rename = "rate-limit-per-minute")]
    pub rate_limit_per_minute: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            api_keys: Vec::new(),
            cors_origin: "*".to_string(),
            rate_limit_per_minute: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory where per-host snapshot files are written
    #[serde(rename = "data-dir")]
    pub data_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: ".".to_string(),
        }
    }
}
