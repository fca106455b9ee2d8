//! Header component renderer.
//!
//! Renders the plugin title bar: centered title text with the theme-toggle
//! glyph pinned at the right edge.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// Displays the title centered horizontally with bold styling and theme colors,
/// and the theme toggle glyph right-aligned. Pads the line to fill the entire
/// pane width.
///
/// # Parameters
///
/// * `row` - Row position to render the header (1-indexed)
/// * `header` - Header information (title, glyph)
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    // reserve two cells at the right edge for the glyph
    let glyph_reserve = 2;
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(padding + title_len + glyph_reserve))
    );
    print!("{}", header.theme_glyph);

    print!("{}", Theme::reset());
    row + 1
}
