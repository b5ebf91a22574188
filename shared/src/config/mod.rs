//! Configuration module with one sub-module per collaborator
//!
//! - `environment` - Environment detection
//! - `server` - HTTP bind address and CORS
//! - `identity_provider` - Management API domain and service credentials
//! - `database` - MySQL pool settings for the cooldown store
//! - `cache` - Redis settings for the cooldown store
//! - `cooldown` - Resend window, per-call timeout and store selection

pub mod cache;
pub mod cooldown;
pub mod database;
pub mod environment;
pub mod identity_provider;
pub mod server;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use cache::CacheConfig;
pub use cooldown::{CooldownConfig, CooldownStoreKind};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use identity_provider::IdentityProviderConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    pub cors: CorsConfig,

    /// Identity provider configuration
    pub identity_provider: IdentityProviderConfig,

    /// Cooldown gate configuration
    pub cooldown: CooldownConfig,

    /// Database configuration, present when the MySQL store is selected
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Redis configuration, present when the Redis store is selected
    #[serde(default)]
    pub cache: Option<CacheConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Credentials for the identity provider and for whichever cooldown store
    /// is selected are required; everything else falls back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let cooldown = CooldownConfig::from_env()?;

        let (database, cache) = match cooldown.store {
            CooldownStoreKind::MySql => (Some(DatabaseConfig::from_env()?), None),
            CooldownStoreKind::Redis => (None, Some(CacheConfig::from_env()?)),
            CooldownStoreKind::Memory => (None, None),
        };

        Ok(Self {
            environment,
            server: ServerConfig::from_env()?,
            cors: CorsConfig::from_env(),
            identity_provider: IdentityProviderConfig::from_env()?,
            cooldown,
            database,
            cache,
        })
    }
}

/// Read a required, non-blank environment variable
pub(crate) fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Read an optional variable and parse it, falling back to `default` when unset
pub(crate) fn parsed_var<T: std::str::FromStr>(
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        _ => Ok(default),
    }
}
