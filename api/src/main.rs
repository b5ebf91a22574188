use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use vr_api::{create_app, telemetry::init_tracing, AppState};
use vr_core::services::{ResendServiceConfig, VerificationResendService};
use vr_infra::{CooldownStoreBackend, ManagementApiClient};
use vr_shared::config::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(Environment::from_env());

    let config = AppConfig::from_env().context("Failed to load configuration")?;

    tracing::info!(
        environment = %config.environment,
        cooldown_store = ?config.cooldown.store,
        cooldown_window_ms = config.cooldown.window_ms,
        "Starting verification resend service"
    );

    let identity_provider = Arc::new(
        ManagementApiClient::new(config.identity_provider.clone())
            .context("Failed to build the management API client")?,
    );
    let cooldown_store = Arc::new(
        CooldownStoreBackend::connect(&config)
            .await
            .context("Failed to connect the cooldown store")?,
    );
    tracing::info!("Cooldown store ready: {}", cooldown_store.kind());

    let resend_service = Arc::new(VerificationResendService::new(
        identity_provider,
        cooldown_store,
        ResendServiceConfig::from(&config.cooldown),
    ));
    let app_state = web::Data::new(AppState::new(resend_service));

    let bind_address = config.server.bind_address();
    tracing::info!("Server will bind to: {}", bind_address);

    if config.cors.is_wildcard() {
        tracing::warn!("CORS_ALLOWED_ORIGIN is not set, any origin may call the API");
    }
    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors_config));
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    tracing::info!("Server stopped");
    Ok(())
}
