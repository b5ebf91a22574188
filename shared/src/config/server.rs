//! HTTP server and CORS configuration

use serde::{Deserialize, Serialize};

use super::parsed_var;
use crate::errors::ConfigError;

/// Preflight cache lifetime: 24 hours
pub const DEFAULT_CORS_MAX_AGE_SECS: usize = 86_400;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Number of worker threads (defaults to CPU count)
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: None,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: parsed_var("SERVER_PORT", defaults.port)?,
            workers: std::env::var("SERVER_WORKERS")
                .ok()
                .and_then(|v| v.parse().ok()),
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed frontend origin; `None` allows any origin
    pub allowed_origin: Option<String>,

    /// Max age for preflight cache in seconds
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: None,
            max_age: DEFAULT_CORS_MAX_AGE_SECS,
        }
    }
}

impl CorsConfig {
    /// Restrict CORS to a single frontend origin
    pub fn for_origin(origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: Some(origin.into()),
            ..Default::default()
        }
    }

    /// Create from environment variables.
    ///
    /// `CORS_ALLOWED_ORIGIN` unset or `*` leaves the wildcard in place.
    pub fn from_env() -> Self {
        let allowed_origin = std::env::var("CORS_ALLOWED_ORIGIN")
            .ok()
            .map(|origin| origin.trim().trim_end_matches('/').to_string())
            .filter(|origin| !origin.is_empty() && origin != "*");

        let max_age = std::env::var("CORS_MAX_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CORS_MAX_AGE_SECS);

        Self {
            allowed_origin,
            max_age,
        }
    }

    /// Whether any origin is accepted
    pub fn is_wildcard(&self) -> bool {
        self.allowed_origin.is_none()
    }
}
