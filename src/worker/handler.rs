//! Worker thread implementation for asynchronous preference storage.
//!
//! This module implements the Zellij worker thread interface, handling all
//! preference-store I/O off the main plugin rendering loop. It includes
//! distributed tracing support for cross-thread observability.

use crate::domain::error::{Result, ZrecipeError};
use crate::domain::prefs::ThemeMode;
use crate::infrastructure::paths;
use crate::storage::backend::PrefsStore;
use crate::storage::JsonPrefs;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for handling preference operations.
///
/// This struct runs on a separate thread spawned by Zellij and processes
/// messages sent from the main plugin thread. The store is initialized lazily
/// on first message receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct PrefsWorker {
    /// Preference store, initialized lazily on first use.
    #[serde(skip)]
    store: Option<Box<dyn PrefsStore>>,
}

impl PrefsWorker {
    /// Creates a new worker with an initialized preference store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized.
    pub fn new() -> Result<Self> {
        let path = paths::get_data_dir().join("prefs.json");
        let store: Box<dyn PrefsStore> = Box::new(JsonPrefs::new(path)?);
        Ok(Self { store: Some(store) })
    }

    /// Returns a mutable reference to the store, failing if not initialized.
    fn get_store(&mut self) -> Result<&mut Box<dyn PrefsStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| ZrecipeError::Worker("store not initialized".to_string()))
    }

    /// Helper for handling store operation results with consistent logging.
    fn handle_store_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "store operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "store operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadPrefs` message.
    fn handle_load_prefs(&mut self) -> WorkerResponse {
        Self::handle_store_result(
            "load prefs",
            self.get_store().and_then(|store| store.load()),
            |record| {
                tracing::debug!(
                    favorite_count = record.favorites.len(),
                    theme = %record.theme,
                    "preferences loaded from store"
                );
                let theme = record.theme_mode();
                WorkerResponse::PrefsLoaded {
                    favorites: record.favorites,
                    theme,
                }
            },
        )
    }

    /// Handles the `ToggleFavorite` message.
    fn handle_toggle_favorite(&mut self, meal_id: &str) -> WorkerResponse {
        Self::handle_store_result(
            "toggle favorite",
            self.get_store()
                .and_then(|store| store.toggle_favorite(meal_id)),
            |favorites| {
                tracing::debug!(
                    meal_id = %meal_id,
                    favorite_count = favorites.len(),
                    "favorite toggled in store"
                );
                WorkerResponse::FavoriteToggled { favorites }
            },
        )
    }

    /// Handles the `SetTheme` message.
    fn handle_set_theme(&mut self, theme: ThemeMode) -> WorkerResponse {
        Self::handle_store_result(
            "set theme",
            self.get_store().and_then(|store| store.set_theme(theme)),
            |()| {
                tracing::debug!(theme = %theme.as_str(), "theme saved in store");
                WorkerResponse::ThemeSaved { theme }
            },
        )
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Reconstructs the OpenTelemetry context from the serialized trace
    /// information in the message, so spans created in the worker thread link
    /// to their parent spans in the main thread. Returns a context guard that
    /// must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = match message {
            WorkerMessage::LoadPrefs { trace_context }
            | WorkerMessage::ToggleFavorite { trace_context, .. }
            | WorkerMessage::SetTheme { trace_context, .. } => trace_context,
        }
        .as_ref()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// This is the main message handling entry point, dispatching to specific
    /// handlers based on the message variant. Automatically attaches trace
    /// context and creates a tracing span for the operation.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadPrefs { .. } => self.handle_load_prefs(),
            WorkerMessage::ToggleFavorite { meal_id, .. } => self.handle_toggle_favorite(&meal_id),
            WorkerMessage::SetTheme { theme, .. } => self.handle_set_theme(theme),
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring spans
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
///
/// Used to ensure tracing is only set up once per worker thread lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for PrefsWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// This is the Zellij worker interface entry point. It:
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Lazy-initializes the preference store if needed
    /// 3. Deserializes the message payload
    /// 4. Processes the message via `handle_message`
    /// 5. Serializes and sends the response back to the main thread
    ///
    /// # Arguments
    ///
    /// * `message` - Message name used for routing the response
    /// * `payload` - JSON-serialized `WorkerMessage`
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        if self.store.is_none() {
            match Self::new() {
                Ok(worker) => {
                    self.store = worker.store;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to initialize preference store");
                    let error_response = WorkerResponse::Error {
                        message: format!("failed to initialize preference store: {e}"),
                    };
                    if let Ok(payload) = serde_json::to_string(&error_response) {
                        post_message_to_plugin(PluginMessage {
                            name: message,
                            payload,
                            worker_name: None,
                        });
                    }
                    return;
                }
            }
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}
