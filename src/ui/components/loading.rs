//! Loading indicator renderer.
//!
//! Renders the indicator shown while a search or random request is in flight.
//! Loading and the empty state are mutually exclusive; the state machine never
//! sets both.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Message shown while a request is in flight.
const LOADING_MESSAGE: &str = "Fetching recipes...";

/// Renders the centered loading indicator.
///
/// # Parameters
///
/// * `row` - Row position for the indicator line (1-indexed)
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
pub fn render_loading(row: usize, theme: &Theme, cols: usize) {
    let msg_len = LOADING_MESSAGE.chars().count();
    let padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.loading_fg));
    print!("{}", " ".repeat(padding));
    print!("{LOADING_MESSAGE}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + msg_len)));
    print!("{}", Theme::reset());
}
