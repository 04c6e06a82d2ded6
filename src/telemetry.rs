//! Telemetry helpers for applications embedding `carbon-charts`.
//!
//! Descriptor builders emit `tracing` events (scale sentinels, degenerate pies,
//! descriptor counts); nothing is printed unless the host installs a
//! subscriber.

/// Initializes a compact subscriber filtered by `RUST_LOG`, falling back to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter("info")
}

/// Like [`init_default_tracing`], with an explicit fallback directive such as
/// `"carbon_charts=debug"` for when `RUST_LOG` is unset.
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
