//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer; they contain no business logic, only display-ready data.
//!
//! The result phases from the state machine surface here as mutually exclusive
//! options: when `detail` is set the overlay covers everything; otherwise
//! exactly one of `loading`, `empty_state` or a non-empty `cards` list applies.

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Cards to display in the result list.
    pub cards: Vec<CardItem>,

    /// Index of the currently selected card within the visible window.
    pub selected_index: usize,

    /// Header information (title, theme toggle glyph).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,

    /// Whether the loading indicator is showing (a request is in flight).
    pub loading: bool,

    /// Empty state message (when the last request yielded nothing displayable).
    pub empty_state: Option<EmptyState>,

    /// Detail overlay content (when a recipe is open).
    pub detail: Option<DetailView>,
}

/// Display information for a single recipe card.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Recipe name.
    pub name: String,

    /// Category label (empty when the record carries none).
    pub category: String,

    /// Whether this card is currently selected.
    pub is_selected: bool,

    /// Whether this recipe's id is in the Favorites Set (liked marker).
    pub is_favorite: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Theme toggle glyph (sun while dark is active, moon otherwise).
    pub theme_glyph: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "/: search  r: random  q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown when a search or random request yields zero displayable recipes,
/// including responses filtered down to nothing and failed fetches.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No recipes found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search input text.
    pub query: String,
}

/// Detail overlay content for a single recipe.
#[derive(Debug, Clone)]
pub struct DetailView {
    /// Recipe title.
    pub title: String,

    /// Category label (empty when absent).
    pub category: String,

    /// Thumbnail image URL (empty when absent).
    pub thumbnail: String,

    /// External source link, or the neutral placeholder when the record
    /// carries none.
    pub source: String,

    /// Whether `source` is the placeholder rather than a real link.
    pub source_is_placeholder: bool,

    /// Pre-formatted "{measure} {ingredient}" lines in slot order.
    pub ingredients: Vec<String>,

    /// Raw instruction text; wrapped to the pane width by the renderer.
    pub instructions: String,
}
