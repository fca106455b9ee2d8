//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components. The detail overlay takes
//! precedence over everything; otherwise the layout is chosen by search mode,
//! and the body shows exactly one of loading, empty state or the card list.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate rendering mode.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!` macros. Does not clear
/// the screen or manage cursor position beyond explicit positioning.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state.active_theme(), rows, cols);
}

/// Renders a view model with mode-specific layout.
fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(detail) = &vm.detail {
        components::render_detail_overlay(detail, theme, rows, cols);
        return;
    }

    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }
}
