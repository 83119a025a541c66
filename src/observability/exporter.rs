//! OpenTelemetry span exporter writing one JSON object per line.
//!
//! Each finished span becomes a flat [`SpanRecord`]:
//!
//! ```json
//! {"service":"Storefront","traceId":"…","spanId":"…","name":"handle_event",
//!  "start":"2026-01-01T12:00:00.000123Z","durationUs":42,
//!  "attributes":{"event_type":"Char('p')"},"events":[]}
//! ```

use super::journal::Journal;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{Key, KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::SystemTime;

/// One exported span.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanRecord {
    pub service: String,
    pub trace_id: String,
    pub span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    pub name: String,
    pub start: String,
    pub duration_us: u64,
    pub attributes: BTreeMap<String, serde_json::Value>,
    pub events: Vec<EventRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A log event recorded inside a span (a `tracing::debug!` etc.).
#[derive(Debug, Serialize)]
pub struct EventRecord {
    pub name: String,
    pub time: String,
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl SpanRecord {
    fn from_span(service: &str, span: &SpanData) -> Self {
        let duration_us = span
            .end_time
            .duration_since(span.start_time)
            .map_or(0, |d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX));

        let parent_span_id =
            (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));

        let error = match &span.status {
            Status::Error { description } => Some(description.to_string()),
            Status::Unset | Status::Ok => None,
        };

        Self {
            service: service.to_string(),
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            name: span.name.to_string(),
            start: timestamp(span.start_time),
            duration_us,
            attributes: attributes(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| EventRecord {
                    name: event.name.to_string(),
                    time: timestamp(event.timestamp),
                    attributes: attributes(&event.attributes),
                })
                .collect(),
            error,
        }
    }
}

fn timestamp(time: SystemTime) -> String {
    chrono::DateTime::<chrono::Utc>::from(time).to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

fn attributes(attributes: &[KeyValue]) -> BTreeMap<String, serde_json::Value> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), json_value(&kv.value)))
        .collect()
}

fn json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::I64(i) => serde_json::Value::from(*i),
        Value::F64(f) => serde_json::Value::from(*f),
        Value::String(s) => serde_json::Value::String(s.to_string()),
        Value::Array(_) => serde_json::Value::String(value.to_string()),
    }
}

/// Exports finished spans into a [`Journal`].
pub struct JournalSpanExporter {
    journal: Journal,
    service: String,
    is_shutdown: bool,
}

impl JournalSpanExporter {
    #[must_use]
    pub fn new(path: PathBuf, service: impl Into<String>) -> Self {
        Self {
            journal: Journal::new(path),
            service: service.into(),
            is_shutdown: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        for span in batch {
            let record = SpanRecord::from_span(&self.service, span);
            let line = serde_json::to_string(&record).map_err(|e| TraceError::from(e.to_string()))?;
            self.journal
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for JournalSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        if let Some(name) = resource.get(Key::from_static_str("service.name")) {
            self.service = name.to_string();
        }
    }
}

impl std::fmt::Debug for JournalSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalSpanExporter")
            .field("journal", &self.journal)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}
