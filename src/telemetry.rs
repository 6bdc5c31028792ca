//! Structured logging setup for the command-line front end.
//!
//! The library only emits `tracing` events; installing a subscriber is
//! left to the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that switches log output to JSON.
pub const TRACE_JSON_ENV: &str = "CPU_SCHED_TRACE_JSON";

/// Installs a global subscriber writing to stderr.
///
/// Environment variables:
/// - RUST_LOG: log filter (default: warn)
/// - CPU_SCHED_TRACE_JSON: JSON output when `1` or `true`
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        tracing::debug!(json = use_json, "tracing initialized");
    }
}
