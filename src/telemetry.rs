//! Opt-in tracing setup for hosts embedding the chart engine.
//!
//! Nothing here runs implicitly: a host either calls `init_default_tracing`
//! once at startup or installs its own `tracing` subscriber with whatever
//! filtering it prefers. The library itself only emits events.

/// Installs a compact fmt subscriber honoring `RUST_LOG`, falling back to
/// the `info` level. Available when the `telemetry` feature is enabled.
///
/// Returns `true` on success, `false` when the feature is disabled or a
/// global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
