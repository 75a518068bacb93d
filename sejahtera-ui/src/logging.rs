//! Tracing subscriber setup shared by binaries.

use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Default filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "error,sejahtera_ui=info,sejahtera_components=info,example=info";

/// Installs a pretty `tracing` subscriber filtered by `RUST_LOG`.
///
/// Falls back to [`DEFAULT_FILTER`]. Calling this more than once is harmless;
/// later calls leave the first subscriber in place.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_FILTER);
}

/// Same as [`init_tracing`], with a caller-provided fallback filter.
pub fn init_tracing_with(fallback: &str) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match EnvFilter::try_new(fallback) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}
