//! Telemetry initialization

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize the global tracing subscriber
///
/// Intended for host binaries and test harnesses. Respects `RUST_LOG` and
/// defaults to `info`. Subsequent calls are no-ops.
pub fn init() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
