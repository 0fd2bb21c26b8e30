//! Telemetry initialization for front ends embedding the pipeline
//!
//! The pipeline itself only emits `tracing` events; installing a subscriber
//! is the host's job. This helper applies the observability config the same
//! way the services do: env-filter overridable via `RUST_LOG`, optional JSON
//! output.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Initialize the global tracing subscriber from config.
///
/// Safe to call once per process; returns quietly if a subscriber is already
/// installed so test harnesses can call it repeatedly.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json_logging {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    // A second init attempt is not an error worth surfacing
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
