//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name attached to every span.
const SERVICE_NAME: &str = "zemoji";

/// Trace file name inside the data directory.
const TRACE_FILE_NAME: &str = "zemoji-otlp.jsonl";

/// Default filter directive when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber with file-based OTLP export.
///
/// The filter comes from `config.trace_level` (any `EnvFilter` directive, e.g.
/// `"debug"` or `"zemoji::picker=trace"`) and defaults to `"info"`. Spans are
/// written to `zemoji-otlp.jsonl` in the data directory.
///
/// Observability is optional: if the data directory cannot be created nothing
/// is installed, and calls after the first are no-ops.
///
/// # Example
///
/// ```rust,no_run
/// use zemoji::observability::init_tracing;
/// use zemoji::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();

    tracing::info!(level, "tracing initialized");
}
