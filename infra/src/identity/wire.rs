//! Request and response shapes of the management API

use serde::Serialize;
use serde_json::Value;

use vr_core::domain::entities::{AccessToken, UserRecord};
use vr_core::errors::IdentityProviderError;

/// Client-credentials grant body for `POST /oauth/token`
#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub audience: &'a str,
    pub grant_type: &'static str,
}

impl<'a> TokenRequest<'a> {
    pub fn client_credentials(client_id: &'a str, client_secret: &'a str, audience: &'a str) -> Self {
        Self {
            client_id,
            client_secret,
            audience,
            grant_type: "client_credentials",
        }
    }
}

/// Body for `POST /api/v2/jobs/verification-email`
#[derive(Debug, Serialize)]
pub struct VerificationEmailRequest<'a> {
    pub user_id: &'a str,
    pub client_id: &'a str,
    pub result_url: &'a str,
}

/// Extract the bearer token from a token endpoint answer.
///
/// 5xx is an outage; any other answer without `access_token` means the
/// credentials were refused.
pub fn parse_token_response(status: u16, body: &Value) -> Result<AccessToken, IdentityProviderError> {
    if status >= 500 {
        return Err(IdentityProviderError::Unavailable(format!(
            "token endpoint answered {}",
            status
        )));
    }

    match body.get("access_token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => Ok(AccessToken::new(token)),
        _ => Err(IdentityProviderError::CredentialsRejected),
    }
}

/// First user of a users-by-email answer; anything but a non-empty list of
/// objects carrying `user_id` counts as "no match"
pub fn parse_user_list(body: Value) -> Option<UserRecord> {
    let first = match body {
        Value::Array(users) => users.into_iter().next()?,
        _ => return None,
    };

    let user_id = first.get("user_id")?.as_str()?.to_string();
    Some(UserRecord {
        user_id,
        email: first.get("email").and_then(Value::as_str).map(str::to_string),
        email_verified: first.get("email_verified").and_then(Value::as_bool),
    })
}

/// Provider error payload kept verbatim: JSON when it parses, a string otherwise
pub fn provider_detail(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
