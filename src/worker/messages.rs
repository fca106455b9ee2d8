//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main plugin
//! thread and the background worker thread that owns the preference store. It
//! also implements distributed tracing context propagation across the thread
//! boundary, so spans created in the worker link to their parents in the UI
//! thread.

use crate::domain::prefs::ThemeMode;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Extracts the OpenTelemetry trace ID and span ID from the active span.
    /// Returns `None` if the current span context is invalid or not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_prefs(LoadPrefs {}),
    toggle_favorite(ToggleFavorite { meal_id: String }),
    set_theme(SetTheme { theme: ThemeMode }),
}

/// Messages sent from the main thread to the worker thread.
///
/// Each variant corresponds to a preference-store operation performed off the
/// UI thread. All variants include an optional trace context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the stored favorites and theme, once at startup.
    LoadPrefs {
        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Toggle a recipe id in the Favorites Set and persist.
    ToggleFavorite {
        /// Identifier of the recipe to toggle.
        meal_id: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Overwrite the persisted theme preference.
    SetTheme {
        /// The new theme mode.
        theme: ThemeMode,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Stored preferences were loaded.
    PrefsLoaded {
        /// Favorited recipe identifiers, in stored order.
        favorites: Vec<String>,

        /// Persisted theme mode.
        theme: ThemeMode,
    },

    /// A favorite toggle was persisted.
    FavoriteToggled {
        /// The authoritative favorites sequence after the toggle.
        favorites: Vec<String>,
    },

    /// The theme preference was persisted.
    ThemeSaved {
        /// The persisted mode.
        theme: ThemeMode,
    },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{WorkerMessage, WorkerResponse};
    use crate::domain::ThemeMode;

    #[test]
    fn messages_round_trip_through_json() {
        let messages = [
            WorkerMessage::load_prefs(),
            WorkerMessage::toggle_favorite("52772".to_string()),
            WorkerMessage::set_theme(ThemeMode::Dark),
        ];

        for message in messages {
            let payload = serde_json::to_string(&message).unwrap();
            let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
            assert_eq!(decoded, message);
        }
    }

    #[test]
    fn responses_round_trip_through_json() {
        let response = WorkerResponse::PrefsLoaded {
            favorites: vec!["52772".to_string()],
            theme: ThemeMode::Dark,
        };
        let payload = serde_json::to_string(&response).unwrap();
        let decoded: WorkerResponse = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, response);
    }
}
