//! Map resend outcomes and request errors to HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse,
};

use vr_core::errors::ResendError;
use vr_shared::ErrorBody;

use crate::i18n::{Language, Message};

/// Status used for a rejection whose provider status is not a 4xx
const DEFAULT_REJECTION_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Build the response for a failed resend
pub fn resend_error_response(error: &ResendError, lang: Language) -> HttpResponse {
    match error {
        ResendError::BadRequest { .. } => HttpResponse::BadRequest()
            .json(ErrorBody::new(Message::MissingParameter.text(lang))),

        ResendError::UserNotFound => {
            HttpResponse::NotFound().json(ErrorBody::new(Message::UserNotFound.text(lang)))
        }

        ResendError::CooldownActive { retry_after_ms } => {
            let retry_after_secs = retry_after_secs(*retry_after_ms);
            HttpResponse::TooManyRequests()
                .insert_header((header::RETRY_AFTER, retry_after_secs.to_string()))
                .json(ErrorBody::new(
                    Message::CooldownActive { retry_after_secs }.text(lang),
                ))
        }

        ResendError::ResendRejected { status, detail } => {
            HttpResponse::build(rejection_status(*status)).json(
                ErrorBody::new(Message::ResendRejected.text(lang)).with_detail(detail.clone()),
            )
        }

        ResendError::AuthBackendUnavailable { .. } => HttpResponse::InternalServerError()
            .json(ErrorBody::new(Message::InternalError.text(lang))),
    }
}

/// Whole seconds, rounded up, never below one
pub(crate) fn retry_after_secs(retry_after_ms: i64) -> u64 {
    let ms = retry_after_ms.max(1) as u64;
    ms.div_ceil(1000)
}

/// The provider's own status when it is a client error
pub(crate) fn rejection_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status)
        .ok()
        .filter(StatusCode::is_client_error)
        .unwrap_or(DEFAULT_REJECTION_STATUS)
}

/// Unparsable or mistyped JSON bodies answer like a missing parameter
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(
        error = %err,
        path = req.path(),
        event = "invalid_json_body",
        "Rejected request body"
    );
    let lang = Language::from_request(req);
    let response = HttpResponse::BadRequest()
        .json(ErrorBody::new(Message::MissingParameter.text(lang)));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_after_rounds_up() {
        assert_eq!(retry_after_secs(1), 1);
        assert_eq!(retry_after_secs(1_000), 1);
        assert_eq!(retry_after_secs(1_001), 2);
        assert_eq!(retry_after_secs(60_000), 60);
        assert_eq!(retry_after_secs(0), 1);
    }

    #[test]
    fn test_rejection_status_passes_client_errors() {
        assert_eq!(rejection_status(404), StatusCode::NOT_FOUND);
        assert_eq!(rejection_status(429), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(rejection_status(503), StatusCode::BAD_REQUEST);
        assert_eq!(rejection_status(302), StatusCode::BAD_REQUEST);
        assert_eq!(rejection_status(9999), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_cooldown_response_has_retry_after() {
        let response = resend_error_response(
            &ResendError::CooldownActive {
                retry_after_ms: 12_500,
            },
            Language::Spanish,
        );
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            "13"
        );
    }
}
