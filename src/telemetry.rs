//! Subscriber setup for hosts that want to see the chart builder's events.
//!
//! Series additions, pending `pointStart`/`pointInterval` values, suppressed
//! keys and encoder placeholder counts are emitted through `tracing` under the
//! `chart_config` target. Without the `telemetry` feature both helpers are
//! no-ops that report `false`.

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "chart_config=info";

/// Installs a subscriber honouring `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVE`].
///
/// Returns `false` when a global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))
            .unwrap_or_default();
        install(filter)
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Installs a subscriber for explicit `directives`, e.g.
/// `"chart_config::render=trace"`. Invalid directives are rejected.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => install(filter),
            Err(_) => false,
        }
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .without_time()
        .try_init()
        .is_ok()
}
