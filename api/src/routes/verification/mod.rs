//! Verification email route handlers

pub mod resend;

pub use resend::{method_not_allowed, preflight, resend_verification, AppState};
