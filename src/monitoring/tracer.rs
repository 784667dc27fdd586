/*!
 * Tracing Setup
 * Structured tracing for simulation runs using the tracing crate
 *
 * `log` records emitted by the scheduler module are bridged into the same
 * subscriber.
 */

use tracing::{info, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_SIM_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("SCHED_SIM_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        info!(json = use_json, "Structured tracing initialized");
    }
}

/// Span covering one simulation call
pub fn span_simulation(policy: &str, processes: usize, max_time: u64) -> Span {
    span!(
        Level::INFO,
        "simulation",
        policy = %policy,
        processes = processes,
        max_time = max_time,
    )
}
