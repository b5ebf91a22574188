//! Management API client
//!
//! Talks to the identity provider tenant over HTTPS:
//!
//! - `POST /oauth/token` - client-credentials grant for a service token
//! - `GET /api/v2/users-by-email` - exact email lookup
//! - `POST /api/v2/jobs/verification-email` - verification email dispatch
//!
//! Every request is sent once, with the configured timeout. No retries.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use vr_core::domain::entities::{AccessToken, UserRecord};
use vr_core::errors::IdentityProviderError;
use vr_core::services::IdentityProviderTrait;
use vr_shared::config::IdentityProviderConfig;
use vr_shared::email::mask_email;

use super::wire::{
    parse_token_response, parse_user_list, provider_detail, TokenRequest,
    VerificationEmailRequest,
};
use crate::InfrastructureError;

const TOKEN_PATH: &str = "/oauth/token";
const USERS_BY_EMAIL_PATH: &str = "/api/v2/users-by-email";
const VERIFICATION_EMAIL_PATH: &str = "/api/v2/jobs/verification-email";

/// HTTPS client for the identity provider's management API
#[derive(Clone)]
pub struct ManagementApiClient {
    http: reqwest::Client,
    config: IdentityProviderConfig,
    base_url: String,
}

impl ManagementApiClient {
    /// Create a client for the configured tenant
    pub fn new(config: IdentityProviderConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("verify-resend/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(
            "Management API client initialized for domain: {}",
            config.domain
        );

        Ok(Self {
            http,
            base_url: config.base_url(),
            config,
        })
    }

    /// Send requests to `base_url` instead of `https://{domain}`.
    ///
    /// Used for local fakes and egress proxies; the token audience is unchanged.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(step: &str, err: reqwest::Error) -> IdentityProviderError {
        let reason = if err.is_timeout() {
            "timed out".to_string()
        } else {
            err.to_string()
        };
        error!("Management API {} failed: {}", step, reason);
        IdentityProviderError::Unavailable(format!("{}: {}", step, reason))
    }
}

/// Statuses that say nothing about the queried email
fn lookup_outage(status: StatusCode) -> bool {
    !status.is_client_error()
        || matches!(
            status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
        )
}

const LOGGED_BODY_LIMIT: usize = 200;

/// Provider body fit for logs: the queried email masked, length capped
fn redacted_body(body: &str, email: &str) -> String {
    let masked = if email.is_empty() {
        body.to_string()
    } else {
        body.replace(email, &mask_email(email))
    };
    match masked.char_indices().nth(LOGGED_BODY_LIMIT) {
        Some((cut, _)) => format!("{}...", &masked[..cut]),
        None => masked,
    }
}

#[async_trait]
impl IdentityProviderTrait for ManagementApiClient {
    async fn acquire_service_token(&self) -> Result<AccessToken, IdentityProviderError> {
        debug!("Requesting management API token");

        let response = self
            .http
            .post(self.url(TOKEN_PATH))
            .json(&TokenRequest::client_credentials(
                &self.config.client_id,
                &self.config.client_secret,
                &self.config.audience,
            ))
            .send()
            .await
            .map_err(|e| Self::transport_error("token request", e))?;

        let status = response.status().as_u16();
        let body: serde_json::Value = response.json().await.map_err(|e| {
            error!("Malformed token response (status {}): {}", status, e);
            IdentityProviderError::Unavailable(format!("malformed token response: {}", e))
        })?;

        let token = parse_token_response(status, &body);
        if matches!(token, Err(IdentityProviderError::CredentialsRejected)) {
            warn!("Token endpoint answered {} without an access token", status);
        }
        token
    }

    async fn find_user_by_email(
        &self,
        token: &AccessToken,
        email: &str,
    ) -> Result<Option<UserRecord>, IdentityProviderError> {
        debug!("Looking up user by email: {}", mask_email(email));

        let response = self
            .http
            .get(self.url(USERS_BY_EMAIL_PATH))
            .bearer_auth(token.secret())
            .query(&[("email", email)])
            .send()
            .await
            .map_err(|e| Self::transport_error("user lookup", e))?;

        let status = response.status();
        if status.is_success() {
            let body: serde_json::Value = response.json().await.map_err(|e| {
                IdentityProviderError::Unavailable(format!(
                    "malformed user lookup response: {}",
                    e
                ))
            })?;
            return Ok(parse_user_list(body));
        }

        let body = response.text().await.unwrap_or_default();
        if lookup_outage(status) {
            error!(
                "User lookup answered {}: {}",
                status,
                redacted_body(&body, email)
            );
            return Err(IdentityProviderError::Unavailable(format!(
                "user lookup answered {}",
                status.as_u16()
            )));
        }

        // A refused query (e.g. a malformed address) has no matching user
        warn!(
            "User lookup answered {}: {}",
            status,
            redacted_body(&body, email)
        );
        Ok(serde_json::from_str(&body).ok().and_then(parse_user_list))
    }

    async fn trigger_verification_email(
        &self,
        token: &AccessToken,
        user_id: &str,
        client_id: &str,
        redirect_uri: &str,
    ) -> Result<(), IdentityProviderError> {
        debug!("Requesting verification email for user: {}", user_id);

        let response = self
            .http
            .post(self.url(VERIFICATION_EMAIL_PATH))
            .bearer_auth(token.secret())
            .json(&VerificationEmailRequest {
                user_id,
                client_id,
                result_url: redirect_uri,
            })
            .send()
            .await
            .map_err(|e| Self::transport_error("verification email request", e))?;

        let status = response.status();
        if status.is_success() {
            info!("Verification email job accepted for user: {}", user_id);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            "Verification email request for {} answered {}",
            user_id, status
        );
        Err(IdentityProviderError::Rejected {
            status: status.as_u16(),
            detail: if body.is_empty() {
                serde_json::Value::String(status.canonical_reason().unwrap_or_default().to_string())
            } else {
                provider_detail(&body)
            },
        })
    }
}
