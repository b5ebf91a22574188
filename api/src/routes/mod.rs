//! Route handlers
//!
//! - `verification` - verification email resend
//! - `health` - liveness probe

pub mod health;
pub mod verification;
