//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSONL file
//! ```
//!
//! - Traces go to `~/.local/share/zellij/zemoji/zemoji-otlp.jsonl`, one OTLP
//!   JSON document per line
//! - The file rotates at 5 MB into numbered backups, three kept
//! - Filter level comes from the `trace_level` plugin option (default `info`)
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Size-rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
