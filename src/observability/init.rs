//! Tracing subscriber initialization.

use super::exporter::JournalSpanExporter;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "Storefront";

/// Journal file name inside the data directory.
pub const JOURNAL_FILE: &str = "storefront-spans.jsonl";

/// Installs the global subscriber: an `EnvFilter` at `trace_level` feeding an
/// OpenTelemetry layer that exports finished spans to the journal.
///
/// Failures are silent; the plugin runs without traces when the data
/// directory cannot be created or a subscriber is already installed.
pub fn init_tracing(config: &Config) {
    let data_dir = paths::data_dir(config.data_dir.as_deref());
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let exporter = JournalSpanExporter::new(data_dir.join(JOURNAL_FILE), SERVICE_NAME);
    let provider = TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build();

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
