//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits declared in `vr_core`.
//!
//! ## Architecture
//!
//! - **Identity**: management API client over HTTPS (reqwest)
//! - **Database**: MySQL cooldown store using SQLx
//! - **Cache**: Redis cooldown store
//! - **Cooldown**: in-memory store and the runtime-selected store backend
//!
//! ## Features
//!
//! - `mysql`: Enable the MySQL cooldown store (default)
//! - `redis-cache`: Enable the Redis cooldown store (default)

/// Identity provider module - management API client
pub mod identity;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and cooldown keys
#[cfg(feature = "redis-cache")]
pub mod cache;

/// Cooldown module - in-memory store and backend selection
pub mod cooldown;

pub use cooldown::{CooldownStoreBackend, InMemoryCooldownStore};
pub use identity::ManagementApiClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[cfg(feature = "redis-cache")]
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
