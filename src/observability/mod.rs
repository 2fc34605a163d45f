//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Traces land in `<data dir>/titlefetch-otlp.json`, rotated at 10 MB with
//! three backups. The level comes from the `trace_level` plugin option
//! (default `"info"`).
//!
//! # Usage
//!
//! ```rust,no_run
//! use titlefetch::observability::init_tracing;
//! use titlefetch::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
