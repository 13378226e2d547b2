//! Span export to a local OTLP/JSON file.
//!
//! ```text
//! tracing → tracing-opentelemetry → SDK provider → OtlpFileExporter → /data/zuggest-otlp.json
//! ```
//!
//! Each exported batch is one line of OTLP/JSON. The file rotates into
//! numbered backups once it grows past a few megabytes. The filter level comes
//! from the `trace_level` plugin option.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
