use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/resend-verification`
///
/// Fields are optional at the serde level so a missing field produces the
/// same 400 as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ResendVerificationRequest {
    #[serde(rename = "userEmail", default)]
    #[validate(required, length(min = 1, max = 320))]
    pub user_email: Option<String>,

    #[serde(rename = "clientId", default)]
    #[validate(required, length(min = 1))]
    pub client_id: Option<String>,

    #[serde(rename = "returnTo", default)]
    #[validate(required, length(min = 1))]
    pub return_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_fields() {
        let request: ResendVerificationRequest = serde_json::from_str(
            r#"{"userEmail":"a@example.com","clientId":"c1","returnTo":"https://app/cb"}"#,
        )
        .unwrap();
        assert_eq!(request.user_email.as_deref(), Some("a@example.com"));
        assert_eq!(request.client_id.as_deref(), Some("c1"));
        assert_eq!(request.return_to.as_deref(), Some("https://app/cb"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_or_empty_fields_fail_validation() {
        let missing: ResendVerificationRequest =
            serde_json::from_str(r#"{"userEmail":"a@example.com","clientId":"c1"}"#).unwrap();
        assert!(missing.validate().is_err());

        let empty: ResendVerificationRequest = serde_json::from_str(
            r#"{"userEmail":"","clientId":"c1","returnTo":"https://app/cb"}"#,
        )
        .unwrap();
        assert!(empty.validate().is_err());
    }
}
