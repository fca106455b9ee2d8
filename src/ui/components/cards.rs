//! Recipe card list renderer.
//!
//! Renders the result grid as a two-column list (NAME, CATEGORY) with a liked
//! marker on favorited cards and full-row selection highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Fixed character width of the NAME column.
const NAME_COLUMN_WIDTH: usize = 42;

/// Renders the card list column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_card_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<width$} {}", "NAME", "CATEGORY", width = NAME_COLUMN_WIDTH);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all cards starting at the specified row.
///
/// # Parameters
///
/// * `row` - Starting row position (1-indexed)
/// * `cards` - Cards in the visible window
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns (for padding)
///
/// # Returns
///
/// The next available row position (row + number of cards)
pub fn render_cards(row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single card row.
///
/// Layout: liked marker (2 cells), name column (fixed width), category column.
/// The row is padded to the full pane width so selection highlighting renders
/// as a solid bar.
///
/// # Styling Precedence
///
/// 1. Selection background (if selected)
/// 2. Liked marker color (marker cell only, unless selected)
/// 3. Normal text color
fn render_card(row: usize, card: &CardItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if card.is_favorite {
        if !card.is_selected {
            print!("{}", Theme::fg(&theme.colors.favorite_fg));
        }
        print!("♥ ");
        if !card.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    } else {
        print!("  ");
    }

    let name = helpers::truncate(&card.name, NAME_COLUMN_WIDTH.saturating_sub(2));
    let name_len = name.chars().count();
    print!("{name}");
    print!(
        "{}",
        " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(2 + name_len))
    );

    print!(" {}", card.category);

    let line_len = NAME_COLUMN_WIDTH + 1 + card.category.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
