//! Configuration for the resend service

use std::time::Duration;

use vr_shared::config::cooldown::{
    CooldownConfig, DEFAULT_CALL_TIMEOUT_MS, DEFAULT_COOLDOWN_WINDOW_MS,
};

/// Configuration for the resend service
#[derive(Debug, Clone)]
pub struct ResendServiceConfig {
    /// Minimum milliseconds between two successful resends for one user
    pub cooldown_window_ms: i64,
    /// Upper bound for each remote call; a timeout counts as "unavailable"
    pub call_timeout: Duration,
}

impl Default for ResendServiceConfig {
    fn default() -> Self {
        Self {
            cooldown_window_ms: DEFAULT_COOLDOWN_WINDOW_MS,
            call_timeout: Duration::from_millis(DEFAULT_CALL_TIMEOUT_MS),
        }
    }
}

impl From<&CooldownConfig> for ResendServiceConfig {
    fn from(config: &CooldownConfig) -> Self {
        Self {
            cooldown_window_ms: config.window_ms,
            call_timeout: Duration::from_millis(config.call_timeout_ms),
        }
    }
}
