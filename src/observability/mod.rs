//! OpenTelemetry tracing exported to a local file.
//!
//! ```text
//! tracing macros → EnvFilter → tracing-opentelemetry → FileSpanExporter → worklink-otlp.json
//! ```
//!
//! A Zellij plugin runs sandboxed without network access, so spans are written
//! as OTLP JSON lines under the plugin data directory instead of being sent to
//! a collector. The file rotates at 10 MB and keeps three backups.
//!
//! The level comes from the `trace_level` plugin option and defaults to `info`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, DEFAULT_LEVEL};
