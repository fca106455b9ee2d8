//! Background worker thread for asynchronous preference storage.
//!
//! This module implements the worker thread that performs all preference-file
//! I/O, keeping the main plugin UI thread free to render. It uses Zellij's
//! worker API for cross-thread communication and includes distributed tracing
//! support for observability.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::PrefsWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
