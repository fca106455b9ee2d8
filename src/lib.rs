//! Zrecipe: a Zellij plugin for browsing recipes by ingredient.
//!
//! Zrecipe is a terminal plugin front-end for a public recipe API. It provides:
//! - Ingredient search ("chicken,garlic") rendered as a card list
//! - A random-recipe request
//! - Client-side category filtering of results
//! - A full-recipe detail overlay (ingredients, instructions, source link)
//! - Persistent favorites and a persistent light/dark theme preference
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Router logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Storage/Worker│
//! │ (ui/)         │   │ (api/)        │   │ (storage/,    │
//! │ - Rendering   │   │ - Endpoints   │   │  worker/)     │
//! │ - Theming     │   │ - Envelopes   │   │ - Prefs JSON  │
//! │ - Components  │   │ - Req context │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Recipe model, prefs, errors (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! User action → event router → remote data client (when the network is
//! needed) → view renderer → ANSI output. Network calls go through Zellij's
//! `web_request` and return as events, so the UI thread never blocks; the two
//! persisted preferences are read and written by a background worker thread.
//!
//! Overlapping search/random requests are serialized by a request generation:
//! every issued request gets a fresh generation number and a response is
//! applied only when its generation is still the latest, so a slow early
//! response can never overwrite a newer one. No cancellation or timeout
//! exists; a request that never completes leaves the loading indicator up.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zrecipe.wasm" {
//!         api_base "https://www.themealdb.com/api/json/v1/1"
//!         theme_light_file "~/.config/zrecipe/light.toml"
//!         theme_dark_file "~/.config/zrecipe/dark.toml"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, request permissions, subscribe to events
//! 2. **Permissions Granted**: post `LoadPrefs` to the worker and issue the
//!    category-list request (a category failure is silent; the filter just
//!    stays at "all categories")
//! 3. **Worker Response**: stored favorites and theme are applied to state
//! 4. **Interaction**: keys become events, events become state changes and
//!    actions, actions become `web_request` calls and worker messages

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use api::ApiClient;
pub use app::{handle_event, Action, AppState, Event, InputMode, ResultsPhase};
pub use domain::{Recipe, Result, ThemeMode, ZrecipeError};
pub use ui::{Theme, ThemePair};

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization. Every field has a default;
/// an empty configuration map yields a fully working plugin.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote recipe API.
    ///
    /// Default: the public TheMealDB v1 endpoint.
    pub api_base: String,

    /// Path to a custom TOML palette replacing the built-in light theme.
    pub theme_light_file: Option<String>,

    /// Path to a custom TOML palette replacing the built-in dark theme.
    pub theme_dark_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: api::DEFAULT_API_BASE.to_string(),
            theme_light_file: None,
            theme_dark_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Missing keys fall back to defaults; theme file
    /// paths get `~` expanded to the sandbox `/host` mount.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zrecipe::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base".to_string(), "https://example.test/v1".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base, "https://example.test/v1");
    /// assert!(config.theme_dark_file.is_none());
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let theme_path = |key: &str| {
            config
                .get(key)
                .map(|path| infrastructure::paths::expand_tilde(path))
        };

        Self {
            api_base: config
                .get("api_base")
                .cloned()
                .unwrap_or_else(|| api::DEFAULT_API_BASE.to_string()),
            theme_light_file: theme_path("theme_light_file"),
            theme_dark_file: theme_path("theme_dark_file"),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Loads one palette, falling back to the built-in on any file problem.
fn load_palette(mode: ThemeMode, file: Option<&String>) -> Theme {
    file.map_or_else(
        || Theme::builtin(mode),
        |path| {
            Theme::from_file(path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme file, using built-in");
                Theme::builtin(mode)
            })
        },
    )
}

/// Initializes the plugin with configuration.
///
/// Creates a new [`AppState`] with the configured API base and both palettes
/// loaded (from files when configured, built-ins otherwise). The favorites and
/// theme preference arrive later via the worker's `PrefsLoaded` response.
///
/// # Example
///
/// ```
/// use zrecipe::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.recipes.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zrecipe plugin");

    let themes = ThemePair {
        light: load_palette(ThemeMode::Light, config.theme_light_file.as_ref()),
        dark: load_palette(ThemeMode::Dark, config.theme_dark_file.as_ref()),
    };

    AppState::new(ApiClient::new(config.api_base.clone()), themes)
}

#[cfg(test)]
mod tests {
    use super::{initialize, Config};
    use std::collections::BTreeMap;

    #[test]
    fn empty_configuration_yields_working_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.api_base, crate::api::DEFAULT_API_BASE);

        let state = initialize(&config);
        assert_eq!(state.active_theme().name, "light");
    }

    #[test]
    fn missing_theme_file_falls_back_to_builtin() {
        let mut map = BTreeMap::new();
        map.insert(
            "theme_dark_file".to_string(),
            "/nonexistent/dark.toml".to_string(),
        );

        let state = initialize(&Config::from_zellij(&map));
        assert_eq!(state.themes.dark.name, "dark");
    }

    #[test]
    fn tilde_theme_paths_are_expanded() {
        let mut map = BTreeMap::new();
        map.insert("theme_light_file".to_string(), "~/light.toml".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.theme_light_file.as_deref(), Some("/host/light.toml"));
    }
}
