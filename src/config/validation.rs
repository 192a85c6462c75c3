use super::Config;
use crate::{ConfigError, ConfigResult};

/// Validates a loaded configuration
///
/// Checks the numeric bounds and required strings that the rest of the system
/// assumes are sane. Returns the first violation found.
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.crawler.max_links == 0 {
        return Err(ConfigError::Validation(
            "crawler.max-links must be at least 1".to_string(),
        ));
    }

    if config.crawler.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "crawler.request-timeout-secs must be at least 1".to_string(),
        ));
    }

    if config.crawler.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler.user-agent must not be empty".to_string(),
        ));
    }

    if config.server.bind_address.trim().is_empty() {
        return Err(ConfigError::Validation(
            "server.bind-address must not be empty".to_string(),
        ));
    }

    if config.server.rate_limit_per_minute == 0 {
        return Err(ConfigError::Validation(
            "server.rate-limit-per-minute must be at least 1".to_string(),
        ));
    }

    if config.output.data_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output.data-dir must not be empty".to_string(),
        ));
    }

    Ok(())
}
