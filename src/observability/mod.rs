//! Span export for debugging the plugin inside Zellij.
//!
//! The plugin has no terminal of its own to log to, so `tracing` spans are
//! bridged into OpenTelemetry and written as JSON lines to a rotating journal
//! under the data directory:
//!
//! ```text
//! tracing spans ─▶ tracing-opentelemetry ─▶ TracerProvider ─▶ JournalSpanExporter ─▶ Journal
//! ```

mod exporter;
mod init;
mod journal;

pub use exporter::{EventRecord, JournalSpanExporter, SpanRecord};
pub use init::{init_tracing, JOURNAL_FILE};
pub use journal::Journal;
