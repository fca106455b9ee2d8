//! Detail overlay renderer.
//!
//! Renders the full-recipe overlay: a bordered box covering most of the pane
//! with the title, category, thumbnail reference, source link, ingredient list
//! and wrapped instruction text. While the overlay is open it covers the card
//! list entirely; only the close keys reach the router.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Horizontal margin between the pane edge and the overlay border.
const OVERLAY_MARGIN: usize = 3;

/// Renders the detail overlay across the pane.
///
/// # Parameters
///
/// * `detail` - Overlay content
/// * `theme` - Active color theme
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
///
/// # Layout
///
/// ```text
///    ┌───────────────────────────────────┐
///    │ Teriyaki Chicken Casserole        │
///    │ Category: Chicken                 │
///    │ Image: https://...                │
///    │ Source: https://...               │
///    │                                   │
///    │ Ingredients:                      │
///    │   3/4 cup soy sauce               │
///    │   ...                             │
///    │                                   │
///    │ Preheat oven to 350... (wrapped)  │
///    └───────────────────────────────────┘
///                ESC/q: close
/// ```
///
/// Content that does not fit vertically is cut at the bottom border; the box
/// never scrolls.
pub fn render_detail_overlay(detail: &DetailView, theme: &Theme, rows: usize, cols: usize) {
    let box_width = cols.saturating_sub(OVERLAY_MARGIN * 2);
    let inner_width = box_width.saturating_sub(4);
    if inner_width == 0 || rows < 6 {
        return;
    }

    // top border at row 2, bottom border two rows above the pane end
    let top_row = 2;
    let bottom_row = rows.saturating_sub(2);
    let content_rows = bottom_row.saturating_sub(top_row + 1);

    let lines = compose_lines(detail, inner_width, theme);

    position_cursor(top_row, 1);
    print!("{}", " ".repeat(OVERLAY_MARGIN));
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("┌{}┐", "─".repeat(box_width.saturating_sub(2)));
    print!("{}", Theme::reset());

    for offset in 0..content_rows {
        let row = top_row + 1 + offset;
        position_cursor(row, 1);
        print!("{}", " ".repeat(OVERLAY_MARGIN));
        print!("{}", Theme::fg(&theme.colors.overlay_border));
        print!("│ ");

        let (text, color) = lines
            .get(offset)
            .cloned()
            .unwrap_or((String::new(), theme.colors.text_normal.clone()));
        let text_len = text.chars().count();

        print!("{}", Theme::fg(&color));
        print!("{text}");
        print!("{}", " ".repeat(inner_width.saturating_sub(text_len)));

        print!("{}", Theme::fg(&theme.colors.overlay_border));
        print!(" │");
        print!("{}", Theme::reset());
    }

    position_cursor(bottom_row, 1);
    print!("{}", " ".repeat(OVERLAY_MARGIN));
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("└{}┘", "─".repeat(box_width.saturating_sub(2)));
    print!("{}", Theme::reset());

    let hint = "ESC/q: close";
    let hint_padding = cols.saturating_sub(hint.len()) / 2;
    position_cursor(bottom_row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(hint_padding));
    print!("{hint}");
    print!("{}", Theme::reset());
}

/// Builds the overlay's content lines as (text, hex color) pairs.
fn compose_lines(detail: &DetailView, width: usize, theme: &Theme) -> Vec<(String, String)> {
    let normal = &theme.colors.text_normal;
    let dim = &theme.colors.text_dim;
    let mut lines: Vec<(String, String)> = Vec::new();

    lines.push((
        helpers::truncate(&detail.title, width),
        theme.colors.header_fg.clone(),
    ));

    if !detail.category.is_empty() {
        lines.push((
            helpers::truncate(&format!("Category: {}", detail.category), width),
            normal.clone(),
        ));
    }

    if !detail.thumbnail.is_empty() {
        lines.push((
            helpers::truncate(&format!("Image: {}", detail.thumbnail), width),
            dim.clone(),
        ));
    }

    let source_color = if detail.source_is_placeholder {
        dim.clone()
    } else {
        theme.colors.link_fg.clone()
    };
    lines.push((
        helpers::truncate(&format!("Source: {}", detail.source), width),
        source_color,
    ));

    lines.push((String::new(), normal.clone()));
    lines.push(("Ingredients:".to_string(), theme.colors.header_fg.clone()));
    for ingredient in &detail.ingredients {
        lines.push((
            helpers::truncate(&format!("  {ingredient}"), width),
            normal.clone(),
        ));
    }

    lines.push((String::new(), normal.clone()));
    for wrapped in helpers::wrap_text(&detail.instructions, width) {
        lines.push((wrapped, normal.clone()));
    }

    lines
}
