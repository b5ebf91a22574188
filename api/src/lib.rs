//! HTTP surface for the verification resend service
//!
//! Exposed as a library so the integration tests can build the same app the
//! binary serves.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::verification::AppState;
