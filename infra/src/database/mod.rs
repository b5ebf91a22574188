//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Cooldown table access

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::MySqlCooldownStore;
