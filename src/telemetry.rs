//! Tracing setup for hosts embedding the chart engine.
//!
//! The engine emits `tracing` events from the refresh path (metric fallback
//! warnings, per-refresh debug summaries) and never installs a subscriber on
//! its own. Hosts either wire their own subscriber and filters or call
//! [`init_default_tracing`] once at startup.

/// Installs a compact stderr subscriber honoring `RUST_LOG`.
///
/// Without `RUST_LOG`, engine events are shown at `debug` and everything
/// else at `info`. Returns `false` when the `telemetry` feature is disabled
/// or the host already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,scenario_chart=debug"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
