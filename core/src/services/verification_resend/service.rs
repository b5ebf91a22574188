//! Main resend service implementation

use std::future::Future;
use std::sync::Arc;

use vr_shared::email::mask_email;

use crate::domain::entities::{CooldownEntry, ResendRequest};
use crate::errors::{CooldownStoreError, IdentityProviderError, ResendError, ResendResult};

use super::clock::{Clock, SystemClock};
use super::config::ResendServiceConfig;
use super::traits::{CooldownStoreTrait, IdentityProviderTrait};
use super::types::ResendReceipt;

/// Orchestrates one verification email resend per call.
///
/// Calls are independent; the cooldown store is the only state they share.
/// The read-then-write on the store is not atomic, so two concurrent calls
/// for the same user can both pass the gate.
pub struct VerificationResendService<I: IdentityProviderTrait, C: CooldownStoreTrait> {
    /// Identity provider client
    identity_provider: Arc<I>,
    /// Cooldown bookkeeping
    cooldown_store: Arc<C>,
    /// Time source for the cooldown gate
    clock: Arc<dyn Clock>,
    /// Service configuration
    config: ResendServiceConfig,
}

impl<I: IdentityProviderTrait, C: CooldownStoreTrait> VerificationResendService<I, C> {
    /// Create a new resend service using the system clock
    ///
    /// # Arguments
    ///
    /// * `identity_provider` - Management API client
    /// * `cooldown_store` - Store holding the last send per user
    /// * `config` - Service configuration
    pub fn new(
        identity_provider: Arc<I>,
        cooldown_store: Arc<C>,
        config: ResendServiceConfig,
    ) -> Self {
        Self {
            identity_provider,
            cooldown_store,
            clock: Arc::new(SystemClock),
            config,
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Validate raw input and resend.
    ///
    /// Missing or blank fields fail with `BadRequest` before any remote call.
    pub async fn resend_from_parts(
        &self,
        user_email: Option<&str>,
        client_id: Option<&str>,
        return_to: Option<&str>,
    ) -> ResendResult<ResendReceipt> {
        let request = ResendRequest::new(user_email, client_id, return_to).map_err(|e| {
            tracing::warn!(error = %e, event = "resend_bad_request", "Rejected resend request with missing parameter");
            e
        })?;
        self.resend(&request).await
    }

    /// Resend the verification email for one request
    ///
    /// This method:
    /// 1. Acquires a service token
    /// 2. Resolves the user by email
    /// 3. Refuses when the last successful send is inside the cooldown window
    /// 4. Triggers the verification email
    /// 5. Records the send time (failures are logged, never surfaced)
    ///
    /// Each step runs at most once and is bounded by `call_timeout`.
    pub async fn resend(&self, request: &ResendRequest) -> ResendResult<ResendReceipt> {
        let masked_email = mask_email(request.user_email());

        tracing::info!(
            email = %masked_email,
            client_id = request.client_id(),
            event = "resend_requested",
            "Verification email resend requested"
        );

        let token = self
            .bounded(
                "acquire_service_token",
                self.identity_provider.acquire_service_token(),
                IdentityProviderError::Unavailable,
            )
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    event = "service_token_failed",
                    "Failed to obtain management API token"
                );
                ResendError::AuthBackendUnavailable {
                    message: e.to_string(),
                }
            })?;

        let user = match self
            .bounded(
                "find_user_by_email",
                self.identity_provider
                    .find_user_by_email(&token, request.user_email()),
                IdentityProviderError::Unavailable,
            )
            .await
        {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::info!(
                    email = %masked_email,
                    event = "user_not_found",
                    "No user matches the email"
                );
                return Err(ResendError::UserNotFound);
            }
            Err(e) => {
                tracing::error!(
                    email = %masked_email,
                    error = %e,
                    event = "user_lookup_failed",
                    "User directory lookup failed"
                );
                return Err(ResendError::AuthBackendUnavailable {
                    message: e.to_string(),
                });
            }
        };

        self.check_cooldown(&user.user_id).await?;

        match self
            .bounded(
                "trigger_verification_email",
                self.identity_provider.trigger_verification_email(
                    &token,
                    &user.user_id,
                    request.client_id(),
                    request.return_to(),
                ),
                IdentityProviderError::Unavailable,
            )
            .await
        {
            Ok(()) => {}
            Err(IdentityProviderError::Rejected { status, detail }) => {
                tracing::warn!(
                    user_id = %user.user_id,
                    status = status,
                    detail = %detail,
                    event = "resend_rejected",
                    "Identity provider rejected the verification email"
                );
                return Err(ResendError::ResendRejected { status, detail });
            }
            Err(e) => {
                tracing::error!(
                    user_id = %user.user_id,
                    error = %e,
                    event = "resend_failed",
                    "Verification email request failed"
                );
                return Err(ResendError::AuthBackendUnavailable {
                    message: e.to_string(),
                });
            }
        }

        let sent_at_millis = self.clock.now_millis();
        let cooldown_recorded = match self
            .bounded(
                "record_sent",
                self.cooldown_store.record_sent(&user.user_id, sent_at_millis),
                CooldownStoreError::Unavailable,
            )
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    user_id = %user.user_id,
                    error = %e,
                    event = "cooldown_write_failed",
                    "Verification email sent but cooldown was not recorded"
                );
                false
            }
        };

        tracing::info!(
            user_id = %user.user_id,
            email = %masked_email,
            cooldown_recorded = cooldown_recorded,
            event = "verification_email_resent",
            "Verification email resent"
        );

        Ok(ResendReceipt {
            user_id: user.user_id,
            sent_at_millis,
            cooldown_recorded,
        })
    }

    /// Fail with `CooldownActive` when the last send is inside the window.
    ///
    /// A store failure lets the request through.
    async fn check_cooldown(&self, user_id: &str) -> ResendResult<()> {
        let last_sent = self
            .bounded(
                "read_last_sent",
                self.cooldown_store.read_last_sent(user_id),
                CooldownStoreError::Unavailable,
            )
            .await;

        match last_sent {
            Ok(Some(last_sent_at_millis)) => {
                let entry = CooldownEntry::new(last_sent_at_millis);
                let now = self.clock.now_millis();
                let window = self.config.cooldown_window_ms;

                if entry.is_active(now, window) {
                    let retry_after_ms = entry.remaining_millis(now, window);
                    tracing::warn!(
                        user_id = user_id,
                        retry_after_ms = retry_after_ms,
                        event = "cooldown_active",
                        "Verification email resend refused during cooldown"
                    );
                    return Err(ResendError::CooldownActive { retry_after_ms });
                }

                tracing::debug!(
                    user_id = user_id,
                    elapsed_ms = entry.elapsed_millis(now),
                    "Cooldown expired"
                );
                Ok(())
            }
            Ok(None) => {
                tracing::debug!(user_id = user_id, "No previous resend recorded");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    user_id = user_id,
                    error = %e,
                    event = "cooldown_read_failed",
                    "Cooldown store unavailable, proceeding without rate limit"
                );
                Ok(())
            }
        }
    }

    /// Run one remote call under `call_timeout`, turning a timeout into `on_timeout`
    async fn bounded<T, E>(
        &self,
        step: &'static str,
        call: impl Future<Output = Result<T, E>>,
        on_timeout: impl FnOnce(String) -> E,
    ) -> Result<T, E> {
        match tokio::time::timeout(self.config.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                let timeout_ms = self.config.call_timeout.as_millis() as u64;
                tracing::warn!(
                    step = step,
                    timeout_ms = timeout_ms,
                    event = "call_timeout",
                    "Remote call timed out"
                );
                Err(on_timeout(format!("{} timed out after {} ms", step, timeout_ms)))
            }
        }
    }
}
