//! Shared utilities and common types for the verification resend server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by every endpoint
//! - Email masking for logs

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CooldownConfig, CooldownStoreKind, CorsConfig, DatabaseConfig,
    Environment, IdentityProviderConfig, ServerConfig,
};
pub use errors::{ConfigError, ErrorBody, MessageBody};
pub use utils::email;
