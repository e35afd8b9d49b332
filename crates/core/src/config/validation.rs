//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `user_agent` is empty
    /// - `max_redirects` exceeds 20
    /// - `timeout_ms` is set below 100ms
    /// - `cache_ttl_secs` or `cache_sweep_interval_secs` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.max_redirects > 20 {
            return Err(ConfigError::Invalid { field: "max_redirects".into(), reason: "must not exceed 20".into() });
        }

        if let Some(timeout_ms) = self.timeout_ms
            && timeout_ms < 100
        {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }

        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::Invalid { field: "cache_ttl_secs".into(), reason: "must be greater than 0".into() });
        }
        if self.cache_sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "cache_sweep_interval_secs".into(),
                reason: "must be greater than 0".into(),
            });
        }

        if self.cache_sweep_interval_secs > self.cache_ttl_secs {
            tracing::warn!(
                ttl_secs = self.cache_ttl_secs,
                sweep_interval_secs = self.cache_sweep_interval_secs,
                "cache sweep interval exceeds the TTL; stale entries linger until the next sweep"
            );
        }

        Ok(())
    }
}
