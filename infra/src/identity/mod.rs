//! Identity provider integration
//!
//! The management API client implements `IdentityProviderTrait` with three
//! HTTPS calls: client-credentials token, users-by-email lookup and the
//! verification email job.

pub mod management_api;
pub mod wire;

pub use management_api::ManagementApiClient;
