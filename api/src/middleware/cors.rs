//! CORS configuration for the frontend that calls the resend endpoint.
//!
//! Only the configured origin is allowed, with `POST`/`OPTIONS` and a
//! `Content-Type` request header. An unset origin (or `*`) allows any origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use vr_shared::config::CorsConfig;

/// Build the CORS middleware from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE])
        .expose_headers(vec![header::RETRY_AFTER])
        .max_age(config.max_age);

    match config.allowed_origin.as_deref() {
        Some(origin) => {
            tracing::info!("Configuring CORS for origin: {}", origin);
            cors.allowed_origin(origin)
        }
        None => {
            tracing::info!("Configuring CORS for any origin");
            cors.allow_any_origin()
        }
    }
}
