//! Request and response shapes of the HTTP API

pub mod resend;

pub use resend::ResendVerificationRequest;
