use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when `RUST_LOG` is unset: service logs at info, sqlx
/// query logging capped at warn.
const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Initialize structured JSON logging for a PFETrack service. Call once at
/// startup with the service name; it is recorded on the first event so log
/// aggregation can tell services apart.
///
/// Safe to call multiple times — subsequent calls are silently ignored.
pub fn init_tracing(service: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(service, "tracing initialized");
    }
}
