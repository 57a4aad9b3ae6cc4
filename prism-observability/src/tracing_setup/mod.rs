//! Tracing setup — structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads the `PRISM_LOG` environment variable for per-subsystem log
/// levels (e.g. `PRISM_LOG=prism_retrieval=debug,prism_embeddings=info`)
/// and falls back to `info` when unset or invalid.
///
/// Idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("PRISM_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    });
}

/// Initialize tracing with a custom filter string (for testing or
/// embedding in a host application). Structured JSON output.
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .json()
            .init();
    });
}
