//! Application factory
//!
//! Builds the Actix-web application around an already wired `AppState`.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::Method,
    web, App,
};
use tracing_actix_web::TracingLogger;

use vr_core::services::{CooldownStoreTrait, IdentityProviderTrait};
use vr_shared::config::CorsConfig;

use crate::handlers::json_error_handler;
use crate::middleware::create_cors;
use crate::routes::health::{health_check, not_found};
use crate::routes::verification::{method_not_allowed, preflight, resend_verification, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<I, C>(
    app_state: web::Data<AppState<I, C>>,
    cors_config: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    I: IdentityProviderTrait + 'static,
    C: CooldownStoreTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(create_cors(cors_config))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(resend_resource::<I, C>("/api/resend-verification"))
        .service(resend_resource::<I, C>("/api/v1/resend-verification"))
        .default_service(web::route().to(not_found))
}

/// The resend endpoint: POST does the work, OPTIONS answers empty, the rest is 405
fn resend_resource<I, C>(path: &str) -> actix_web::Resource
where
    I: IdentityProviderTrait + 'static,
    C: CooldownStoreTrait + 'static,
{
    web::resource(path)
        .route(web::post().to(resend_verification::<I, C>))
        .route(web::method(Method::OPTIONS).to(preflight))
        .default_service(web::to(method_not_allowed))
}
