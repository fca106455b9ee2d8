//! Input mode and result phase state types.
//!
//! This module defines the small state machines that control keybinding
//! interpretation and the result area's display. The result phases are
//! mutually exclusive by construction: the state holds exactly one at a time
//! and every transition replaces it.

/// Current input handling mode.
///
/// Controls which keybindings are active and how typed characters are
/// processed. Determines the displayed footer text and search bar visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), Enter (view), f (favorite),
    /// / (search), r (random), c/C (category), t (theme), q (quit).
    Normal,

    /// Typing into the ingredient search box.
    ///
    /// Characters accumulate into the input; Enter submits, Esc cancels.
    Search,
}

/// Display phase of the result area.
///
/// Transition rules: any new search/random request moves to `Loading`
/// (clearing current results and hiding the empty indicator); a response with
/// at least one displayable recipe moves to `HasResults`; a response with zero
/// recipes, or a fetch error, moves to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsPhase {
    /// No request issued yet (startup).
    Idle,

    /// A search or random request is in flight.
    Loading,

    /// The last response produced at least one displayable card.
    HasResults,

    /// The last response produced nothing displayable (zero results, a
    /// category filter that retained nothing, or a failed fetch).
    Empty,
}
