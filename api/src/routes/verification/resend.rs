use actix_web::{
    http::header::{self, HeaderName, HeaderValue},
    web, HttpRequest, HttpResponse,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use vr_core::services::{CooldownStoreTrait, IdentityProviderTrait, VerificationResendService};
use vr_shared::{email::mask_email, ErrorBody, MessageBody};

use crate::dto::ResendVerificationRequest;
use crate::handlers::resend_error_response;
use crate::i18n::{Language, Message};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Application state that holds shared services
pub struct AppState<I, C>
where
    I: IdentityProviderTrait,
    C: CooldownStoreTrait,
{
    pub resend_service: Arc<VerificationResendService<I, C>>,
}

impl<I, C> AppState<I, C>
where
    I: IdentityProviderTrait,
    C: CooldownStoreTrait,
{
    pub fn new(resend_service: Arc<VerificationResendService<I, C>>) -> Self {
        Self { resend_service }
    }
}

/// Handler for POST /api/resend-verification
///
/// # Request Body
///
/// ```json
/// {
///     "userEmail": "a@example.com",
///     "clientId": "c1",
///     "returnTo": "https://app/cb"
/// }
/// ```
///
/// # Responses
///
/// - 200 `{ "message": ... }` - email resent
/// - 400 `{ "error": "Falta algún parámetro" }`
/// - 404 `{ "error": ... }` - no user with that email
/// - 429 `{ "error": ... }` with `Retry-After` - cooldown active
/// - 4xx `{ "error": ..., "detail": ... }` - provider refused the resend
/// - 500 `{ "error": ... }` - identity provider unreachable
pub async fn resend_verification<I, C>(
    req: HttpRequest,
    state: web::Data<AppState<I, C>>,
    request: web::Json<ResendVerificationRequest>,
) -> HttpResponse
where
    I: IdentityProviderTrait + 'static,
    C: CooldownStoreTrait + 'static,
{
    let request_id = request_id(&req);
    let lang = Language::from_request(&req);

    let mut response = resend(&state, request.into_inner(), &request_id, lang).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

async fn resend<I, C>(
    state: &AppState<I, C>,
    request: ResendVerificationRequest,
    request_id: &str,
    lang: Language,
) -> HttpResponse
where
    I: IdentityProviderTrait,
    C: CooldownStoreTrait,
{
    if let Err(validation_errors) = request.validate() {
        let fields: Vec<String> = validation_errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        tracing::warn!(
            request_id = request_id,
            fields = ?fields,
            event = "resend_bad_request",
            "Resend request is missing parameters"
        );
        return HttpResponse::BadRequest()
            .json(ErrorBody::new(Message::MissingParameter.text(lang)));
    }

    tracing::info!(
        request_id = request_id,
        email = %mask_email(request.user_email.as_deref().unwrap_or_default()),
        "Processing resend verification request"
    );

    let result = state
        .resend_service
        .resend_from_parts(
            request.user_email.as_deref(),
            request.client_id.as_deref(),
            request.return_to.as_deref(),
        )
        .await;

    match result {
        Ok(receipt) => {
            tracing::info!(
                request_id = request_id,
                user_id = %receipt.user_id,
                sent_at = ?receipt.sent_at(),
                cooldown_recorded = receipt.cooldown_recorded,
                "Resend verification request completed"
            );
            HttpResponse::Ok().json(MessageBody::new(Message::VerificationResent.text(lang)))
        }
        Err(error) => {
            tracing::info!(
                request_id = request_id,
                code = error.code(),
                retryable = error.is_retryable(),
                "Resend verification request refused"
            );
            resend_error_response(&error, lang)
        }
    }
}

/// Handler for OPTIONS on the resend route: 200 with an empty body
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Any other method on the resend route
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    let lang = Language::from_request(&req);
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST, OPTIONS"))
        .json(ErrorBody::new(Message::MethodNotAllowed.text(lang)))
}

/// Caller-supplied `X-Request-Id`, or a fresh one
fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
