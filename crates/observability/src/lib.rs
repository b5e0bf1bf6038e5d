//! Process-wide logging setup for the stock simulation binaries.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Structured JSON lines on stderr, filtered via `RUST_LOG` (default `info`).
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

/// Like [`init`] but with an explicit fallback filter, for binaries that want
/// a noisier default (e.g. `debug` to see every applied movement).
pub fn init_with_default(fallback: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
