//! OpenTelemetry-based observability with file-based trace export.
//!
//! This module provides distributed tracing infrastructure for the plugin,
//! using OpenTelemetry OTLP format with file-based exporting. Traces are
//! written to JSON files for offline analysis, since a sandboxed plugin has no
//! network collector to ship them to.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `trace_level` option in the plugin configuration
//! 2. Default: `"info"`
//!
//! Traces land in `zrecipe-otlp.json` inside the plugin data directory, with
//! size-based rotation and a fixed number of retained backups.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `tracer`: OpenTelemetry tracer provider with file export
//! - `span_formatter`: OTLP JSON span serialization
//! - `file_writer`: Rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
