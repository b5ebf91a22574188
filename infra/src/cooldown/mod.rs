//! Cooldown store selection
//!
//! - `memory` - process-local map, for development and tests
//! - `backend` - enum over every compiled-in store, chosen from configuration

pub mod backend;
pub mod memory;

pub use backend::CooldownStoreBackend;
pub use memory::InMemoryCooldownStore;
