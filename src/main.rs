//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the zrecipe library
//! and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! The plugin uses Zellij's worker thread support for preference storage and
//! `web_request` for all network traffic:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   Zellij Main Thread         │
//! │  ┌──────────────────┐        │
//! │  │  State (plugin)  │───► web_request ───► recipe API
//! │  └──────────────────┘        │
//! │          │ IPC               │
//! │          ▼                   │
//! │  ┌──────────────────┐        │
//! │  │   PrefsWorker    │───► prefs.json
//! │  │  (worker thread) │        │
//! │  └──────────────────┘        │
//! └──────────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: register for `Key`, `CustomMessage`, `WebRequestResult`
//!    and `PermissionRequestResult` events
//! 3. **Permissions Granted**: load stored preferences, fetch the category list
//! 4. **Update**: translate events, delegate to the library event handler,
//!    execute returned actions
//! 5. **Render**: call the library render function
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`k`/arrows: move between cards
//! - `Enter`: open the selected recipe's detail overlay
//! - `f`: toggle favorite on the selected card
//! - `/`: enter ingredient search
//! - `r`: random recipe
//! - `c` / `C`: cycle the category filter forward / back
//! - `t`: toggle light/dark theme
//! - `q`: close the plugin pane
//!
//! Search mode:
//! - printable keys: type ingredients (comma separated)
//! - `Enter`: submit, `Esc`: cancel
//!
//! Detail overlay:
//! - `Esc`/`q`: close; all other keys are swallowed

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, web_request};

use zrecipe::worker::{PrefsWorker, WorkerMessage, WorkerResponse};
use zrecipe::{handle_event, Action, Config, Event, InputMode};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(PrefsWorker, zrecipe_worker, ZRECIPE_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication.
struct State {
    /// Core application state from the library layer.
    app: zrecipe::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zrecipe::initialize(&default_config),
            worker_name: "zrecipe".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `WebAccess`: issue requests against the recipe API
    /// - `FullHdAccess`: persist preferences under the `/host` mount
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zrecipe::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        self.app = zrecipe::initialize(&config);
        tracing::debug!(api_base = %config.api_base, "app state initialized");

        request_permission(&[PermissionType::WebAccess, PermissionType::FullHdAccess]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    self.execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        zrecipe::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// The mapping is mode-aware: the detail overlay swallows everything but
    /// its close keys, search mode routes printable keys into the input, and
    /// normal mode binds the command keys.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.detail.is_some() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Char('q') => Some(Event::CloseOverlay),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Search => match key.bare_key {
                BareKey::Enter => Some(Event::SubmitSearch),
                BareKey::Esc => Some(Event::ExitSearch),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
                BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
                BareKey::Enter => Some(Event::ViewDetail),
                BareKey::Char('/') => Some(Event::SearchMode),
                BareKey::Char('r') => Some(Event::RandomRequest),
                BareKey::Char('c') => Some(Event::NextCategory),
                BareKey::Char('C') => Some(Event::PrevCategory),
                BareKey::Char('f') => Some(Event::ToggleFavorite),
                BareKey::Char('t') => Some(Event::ToggleTheme),
                BareKey::Char('q') => Some(Event::CloseFocus),
                BareKey::Esc => Some(Event::Escape),
                _ => None,
            },
        }
    }

    /// Handles permission request results.
    ///
    /// Startup work waits for permissions: the preference load needs disk
    /// access and the category fetch needs web access.
    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - loading prefs and categories");
                self.post_worker_message(&WorkerMessage::load_prefs());
                self.execute_action(&Action::Fetch(self.app.api.categories()));
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - plugin functionality limited");
            }
        }
    }

    /// Maps custom message events (worker responses) to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(Event::WorkerResponse(response)),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Maps web request results to application events.
    ///
    /// The request context identifies which API operation the response answers;
    /// contexts this plugin did not produce are ignored.
    fn map_web_request_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let kind = zrecipe::api::RequestKind::from_context(context)?;
        tracing::debug!(kind = ?kind, status = status, body_len = body.len(), "web response");
        Some(Event::WebResponse { kind, status, body })
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => {
                tracing::debug!(url = %request.url, "issuing web request");
                web_request(
                    request.url.clone(),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.kind.to_context(),
                );
            }
            Action::PostToWorker(message) => {
                tracing::debug!(message = ?message, "posting message to worker");
                self.post_worker_message(message);
            }
        }
    }
}
