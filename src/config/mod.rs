//! Configuration module for Contact-Sweep
//!
//! Configuration is a TOML file with kebab-case keys. Every section is
//! optional; omitted values fall back to defaults, so running without a config
//! file at all is supported.

mod types;
mod validation;

pub use types::{Config, CrawlerConfig, OutputConfig, ServerConfig};
pub use validation::validate_config;

use crate::ConfigResult;
use std::path::Path;

/// Loads and validates a configuration file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Parsed and validated configuration
/// * `Err(ConfigError)` - File could not be read, parsed, or validated
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let contents = std::fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&contents)?;
    apply_env_overrides(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// Builds the default configuration, applying environment overrides
///
/// Used when no config file is given on the command line.
pub fn default_config() -> Config {
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    config
}

/// Applies environment variable overrides to a configuration
///
/// `API_KEY` is appended to the accepted key list so deployments can inject
/// the key without editing the config file.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var("API_KEY") {
        if !key.is_empty() && !config.server.api_keys.contains(&key) {
            config.server.api_keys.push(key);
        }
    }
}
