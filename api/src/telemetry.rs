//! Tracing subscriber setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vr_shared::config::Environment;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the environment picks the level.
pub fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter()));

    let registry = tracing_subscriber::registry().with(filter);

    if environment.is_production() {
        registry.with(fmt::layer().with_target(true)).init();
    } else {
        registry.with(fmt::layer().pretty()).init();
    }
}
