//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type: imperative commands produced by the
//! event handler after processing user input or system events. Actions bridge
//! pure state transformations and effectful operations like issuing network
//! requests, messaging the storage worker, or closing the pane. The handler
//! stays free of I/O, so the full router logic runs under `cargo test` on the
//! host.

use crate::api::ApiRequest;
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues a request against the remote recipe API via `web_request`.
    ///
    /// The response returns asynchronously as a `WebRequestResult` event
    /// carrying the request's context map.
    Fetch(ApiRequest),

    /// Posts a message to the background storage worker.
    ///
    /// Used for preference loads and persisted mutations (favorite toggles,
    /// theme changes) without blocking the UI thread.
    PostToWorker(WorkerMessage),
}
