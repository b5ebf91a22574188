//! Domain-specific error types.
//!
//! `ResendError` is the terminal outcome of a failed resend call. The
//! collaborator errors (`IdentityProviderError`, `CooldownStoreError`) never
//! leave the orchestrator: each is mapped at its call site.

use thiserror::Error;

/// Terminal failure outcomes of one resend call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResendError {
    /// Caller input missing or blank; no remote call was made
    #[error("Missing required parameter: {field}")]
    BadRequest { field: &'static str },

    /// No identity matches the email
    #[error("No user found for the given email")]
    UserNotFound,

    /// A resend succeeded less than one cooldown window ago
    #[error("Cooldown active, retry in {retry_after_ms} ms")]
    CooldownActive { retry_after_ms: i64 },

    /// Token acquisition or a directory call failed
    #[error("Identity provider unavailable: {message}")]
    AuthBackendUnavailable { message: String },

    /// The provider refused to send the verification email
    #[error("Identity provider rejected the resend (status {status})")]
    ResendRejected {
        status: u16,
        detail: serde_json::Value,
    },
}

impl ResendError {
    /// Stable machine-readable code for logs and metrics
    pub fn code(&self) -> &'static str {
        match self {
            ResendError::BadRequest { .. } => "BAD_REQUEST",
            ResendError::UserNotFound => "USER_NOT_FOUND",
            ResendError::CooldownActive { .. } => "COOLDOWN_ACTIVE",
            ResendError::AuthBackendUnavailable { .. } => "AUTH_BACKEND_UNAVAILABLE",
            ResendError::ResendRejected { .. } => "RESEND_REJECTED",
        }
    }

    /// Whether repeating the same request later can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ResendError::CooldownActive { .. }
                | ResendError::AuthBackendUnavailable { .. }
                | ResendError::ResendRejected { .. }
        )
    }
}

/// Failures reported by the identity provider client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdentityProviderError {
    /// Unreachable, timed out, or answered with something unparsable
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),

    /// Token endpoint answered without an access token
    #[error("Service credentials rejected: no access token in response")]
    CredentialsRejected,

    /// Non-success answer to the verification email request
    #[error("Identity provider rejected the request with status {status}")]
    Rejected {
        status: u16,
        detail: serde_json::Value,
    },
}

/// Failures reported by the cooldown store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CooldownStoreError {
    /// Any storage failure other than "no record"
    #[error("Cooldown store unavailable: {0}")]
    Unavailable(String),
}

pub type ResendResult<T> = Result<T, ResendError>;
