//! Diagnostic logging setup.
//!
//! Installs a `tracing-subscriber` fmt layer. `RUST_LOG` wins over the
//! filter stored in settings.

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// Build the filter: `RUST_LOG` if set and valid, else `fallback`, else the
/// built-in default.
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(fallback_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(fallback_filter))
        .with_target(false)
        .try_init();
}
