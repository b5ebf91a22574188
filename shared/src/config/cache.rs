//! Redis configuration for the cooldown store

use serde::{Deserialize, Serialize};

use super::required_var;
use crate::errors::ConfigError;

/// Redis connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Key prefix for cooldown entries
    pub key_prefix: String,
}

impl CacheConfig {
    /// Create a configuration with the default key prefix
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key_prefix: String::from("verification:cooldown"),
        }
    }

    /// Create from environment variables; `REDIS_URL` is required
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(required_var("REDIS_URL")?);
        if let Ok(prefix) = std::env::var("REDIS_KEY_PREFIX") {
            if !prefix.trim().is_empty() {
                config.key_prefix = prefix.trim().trim_end_matches(':').to_string();
            }
        }
        Ok(config)
    }
}
