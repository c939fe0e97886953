//! Logging setup for the todo service.
//!
//! Installs a `tracing-subscriber` fmt layer driven by `RUST_LOG` (via
//! [`EnvFilter`]), defaulting to `info` when the variable is unset. Spans
//! created by the handler's `#[tracing::instrument]` attributes show up in
//! this output.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global tracing subscriber. Call once at startup, before
/// any spans or events are emitted.
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
