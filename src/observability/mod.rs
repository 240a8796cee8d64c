//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/hnsearch/hnsearch-otlp.json`
//! (`/host/...` inside the sandbox), rotating at 10MB with 3 backups.
//!
//! Each search request carries the trace and span ID of the span that issued
//! it in its web request context, so the span that handles the response can
//! be correlated with the one that sent it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use hnsearch::observability::init_tracing;
//! use hnsearch::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod exporter;
mod file_writer;
mod init;

pub use init::{init_tracing, TRACE_FILE_NAME};
