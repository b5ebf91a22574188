//! MySQL repository implementations

pub mod cooldown_repository_impl;

pub use cooldown_repository_impl::MySqlCooldownStore;
