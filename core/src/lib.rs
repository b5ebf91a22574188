//! # Verification Resend Core
//!
//! Domain layer for the verification resend service: entities, the error
//! taxonomy, the collaborator traits the infrastructure implements, and the
//! orchestrator that sequences one resend request end to end.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
