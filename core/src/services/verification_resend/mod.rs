//! Verification email resend orchestration
//!
//! This module sequences one resend request end to end:
//! - Service token acquisition from the identity provider
//! - User lookup by email
//! - Cooldown gate backed by a persisted per-user timestamp
//! - Verification email trigger
//! - Best-effort recording of the successful attempt

mod clock;
mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use config::ResendServiceConfig;
pub use service::VerificationResendService;
pub use traits::{CooldownStoreTrait, IdentityProviderTrait};
pub use types::ResendReceipt;
