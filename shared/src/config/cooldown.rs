//! Cooldown gate configuration

use serde::{Deserialize, Serialize};

use super::parsed_var;
use crate::errors::ConfigError;

/// Minimum time between two successful resends for the same user
pub const DEFAULT_COOLDOWN_WINDOW_MS: i64 = 60_000;

/// Upper bound for each remote call made while handling a resend
pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 5_000;

/// Backing store for cooldown entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CooldownStoreKind {
    /// MySQL table via sqlx
    #[default]
    MySql,
    /// Redis keys
    Redis,
    /// Process-local map, development only
    Memory,
}

impl std::str::FromStr for CooldownStoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(CooldownStoreKind::MySql),
            "redis" => Ok(CooldownStoreKind::Redis),
            "memory" | "in-memory" => Ok(CooldownStoreKind::Memory),
            _ => Err(format!("Unknown cooldown store: {}", s)),
        }
    }
}

/// Cooldown and timeout settings for the resend flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CooldownConfig {
    /// Cooldown window in milliseconds
    pub window_ms: i64,

    /// Timeout applied to each remote call in milliseconds
    pub call_timeout_ms: u64,

    /// Which store keeps the cooldown entries
    pub store: CooldownStoreKind,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            window_ms: DEFAULT_COOLDOWN_WINDOW_MS,
            call_timeout_ms: DEFAULT_CALL_TIMEOUT_MS,
            store: CooldownStoreKind::default(),
        }
    }
}

impl CooldownConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let window_ms = parsed_var("RESEND_COOLDOWN_MS", DEFAULT_COOLDOWN_WINDOW_MS)?;
        if window_ms < 0 {
            return Err(ConfigError::Invalid {
                name: "RESEND_COOLDOWN_MS",
                value: window_ms.to_string(),
            });
        }

        Ok(Self {
            window_ms,
            call_timeout_ms: parsed_var("RESEND_CALL_TIMEOUT_MS", DEFAULT_CALL_TIMEOUT_MS)?,
            store: parsed_var("COOLDOWN_STORE", CooldownStoreKind::default())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CooldownConfig::default();
        assert_eq!(config.window_ms, 60_000);
        assert_eq!(config.call_timeout_ms, 5_000);
        assert_eq!(config.store, CooldownStoreKind::MySql);
    }

    #[test]
    fn test_store_kind_parsing() {
        assert_eq!("Redis".parse::<CooldownStoreKind>().unwrap(), CooldownStoreKind::Redis);
        assert_eq!("in-memory".parse::<CooldownStoreKind>().unwrap(), CooldownStoreKind::Memory);
        assert!("dynamo".parse::<CooldownStoreKind>().is_err());
    }
}
