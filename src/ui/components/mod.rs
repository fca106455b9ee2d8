//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements. Each component renders one part of the interface; the layout
//! functions below compose them per mode.
//!
//! # Components
//!
//! - [`header`]: Title bar with theme toggle glyph
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Ingredient search input box
//! - [`cards`]: Recipe result list with liked markers
//! - [`loading`]: In-flight request indicator
//! - [`empty`]: Empty state message for zero results
//! - [`detail`]: Full-recipe overlay
//!
//! # Layout Modes
//!
//! - [`render_normal_mode`]: Header + body + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + body + Footer
//! - [`render_detail_overlay`]: overlay box covering the pane
//!
//! where the body is exactly one of: loading indicator, empty state, or the
//! card list.

mod cards;
mod detail;
mod empty;
mod footer;
mod header;
mod loading;
mod search;

pub use detail::render_detail_overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UiViewModel};

use cards::{render_card_headers, render_cards};
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use loading::render_loading;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the body section: exactly one of loading, empty state, or cards.
///
/// # Returns
///
/// The next available row position after the rendered content
fn render_body(row: usize, vm: &UiViewModel, theme: &Theme, cols: usize) -> usize {
    if vm.loading {
        render_loading(row + 2, theme, cols);
        return row + 3;
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(row + 2, empty, theme, cols);
        return row + 4;
    }

    let after_headers = render_card_headers(row, theme);
    render_cards(after_headers, &vm.cards, theme, cols)
}

/// Renders the normal mode layout (no search bar).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Body: loading | empty | card headers + cards]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_body(current_row, vm, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the search mode layout (with search bar).
///
/// Same as [`render_normal_mode`] with the 3-line search box between the
/// header border and the body.
pub fn render_search_mode(
    vm: &UiViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    let _current_row = render_body(current_row, vm, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
