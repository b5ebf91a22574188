//! Traits for identity provider and cooldown store integration

use async_trait::async_trait;

use crate::domain::entities::{AccessToken, UserRecord};
use crate::errors::{CooldownStoreError, IdentityProviderError};

/// Trait for the identity provider's management surface
#[async_trait]
pub trait IdentityProviderTrait: Send + Sync {
    /// Exchange the configured service credentials for a bearer token
    async fn acquire_service_token(&self) -> Result<AccessToken, IdentityProviderError>;

    /// Look up a user by exact email; `None` when the directory has no match
    async fn find_user_by_email(
        &self,
        token: &AccessToken,
        email: &str,
    ) -> Result<Option<UserRecord>, IdentityProviderError>;

    /// Ask the provider to send a verification email to `user_id`
    async fn trigger_verification_email(
        &self,
        token: &AccessToken,
        user_id: &str,
        client_id: &str,
        redirect_uri: &str,
    ) -> Result<(), IdentityProviderError>;
}

/// Trait for durable per-user cooldown bookkeeping
#[async_trait]
pub trait CooldownStoreTrait: Send + Sync {
    /// Last successful resend in epoch millis; `None` when never sent
    async fn read_last_sent(&self, user_id: &str) -> Result<Option<i64>, CooldownStoreError>;

    /// Record a send for `user_id`; a stored later timestamp is kept
    async fn record_sent(&self, user_id: &str, sent_at_millis: i64)
        -> Result<(), CooldownStoreError>;
}
