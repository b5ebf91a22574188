//! Validated input for one resend call.

use serde::{Deserialize, Serialize};

use crate::errors::ResendError;

/// A resend request whose three fields are present and non-blank.
///
/// Construct through [`ResendRequest::new`]; the orchestrator never sees an
/// invalid request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendRequest {
    user_email: String,
    client_id: String,
    return_to: String,
}

impl ResendRequest {
    /// Validate raw input. The first missing or blank field is reported.
    pub fn new(
        user_email: Option<&str>,
        client_id: Option<&str>,
        return_to: Option<&str>,
    ) -> Result<Self, ResendError> {
        Ok(Self {
            user_email: required("userEmail", user_email)?,
            client_id: required("clientId", client_id)?,
            return_to: required("returnTo", return_to)?,
        })
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn return_to(&self) -> &str {
        &self.return_to
    }
}

fn required(field: &'static str, value: Option<&str>) -> Result<String, ResendError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ResendError::BadRequest { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_is_trimmed() {
        let request =
            ResendRequest::new(Some(" a@example.com "), Some("c1"), Some("https://app/cb")).unwrap();
        assert_eq!(request.user_email(), "a@example.com");
        assert_eq!(request.client_id(), "c1");
        assert_eq!(request.return_to(), "https://app/cb");
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let cases = [
            (None, Some("c1"), Some("https://app/cb"), "userEmail"),
            (Some("a@example.com"), Some("  "), Some("https://app/cb"), "clientId"),
            (Some("a@example.com"), Some("c1"), None, "returnTo"),
            (Some(""), None, None, "userEmail"),
        ];

        for (email, client, return_to, expected) in cases {
            match ResendRequest::new(email, client, return_to) {
                Err(ResendError::BadRequest { field }) => assert_eq!(field, expected),
                other => panic!("Expected BadRequest for {}, got {:?}", expected, other),
            }
        }
    }
}
