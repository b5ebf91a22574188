use actix_web::{HttpRequest, HttpResponse};

use vr_shared::ErrorBody;

use crate::i18n::{Language, Message};

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "verify-resend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    let lang = Language::from_request(&req);
    HttpResponse::NotFound().json(ErrorBody::new(Message::NotFound.text(lang)))
}
