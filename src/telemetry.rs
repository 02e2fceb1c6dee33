//! Telemetry helpers for applications embedding `plot-rs`.
//!
//! Layout and draw passes emit `tracing` events (stage transitions at `debug`,
//! per-renderer and padding detail at `trace`). Hosts either call one of the
//! helpers below or wire their own subscriber and filters.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` wins over [`DEFAULT_FILTER`] when present.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Initializes a compact `tracing` subscriber with `fallback_filter` as the
/// directive set used when `RUST_LOG` is unset (for example
/// `"plot_rs::api=debug"` to watch draw-pass stages).
///
/// Returns `false` when the feature is disabled, or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
