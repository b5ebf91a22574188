//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{parsed_var, required_var};
use crate::errors::ConfigError;

/// Database configuration for the MySQL cooldown store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/verify_resend"),
            max_connections: 5,
            connect_timeout: 5,
            idle_timeout: 600,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables; `DATABASE_URL` is required
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            url: required_var("DATABASE_URL")?,
            max_connections: parsed_var("DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            connect_timeout: parsed_var("DATABASE_CONNECT_TIMEOUT", defaults.connect_timeout)?,
            idle_timeout: defaults.idle_timeout,
        })
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
