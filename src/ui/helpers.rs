//! Shared rendering utilities and helpers.
//!
//! Low-level utilities used across UI components: cursor positioning, text
//! truncation and word wrapping for the instruction text in the detail overlay.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to a maximum character width, appending "..." when cut.
///
/// Operates on character counts, not bytes, so multi-byte names truncate
/// cleanly.
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return chars.into_iter().take(max_width).collect();
    }
    let kept: String = chars.into_iter().take(max_width - 3).collect();
    format!("{kept}...")
}

/// Wraps text into lines no wider than `width` characters.
///
/// Splits on whitespace and greedily packs words per line; paragraph breaks in
/// the input (newlines) are preserved as line boundaries. Words longer than
/// `width` are emitted on their own overlong line rather than split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::{truncate, wrap_text};

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("Chicken", 10), "Chicken");
    }

    #[test]
    fn truncate_long_text_with_ellipsis() {
        assert_eq!(truncate("Teriyaki Chicken Casserole", 12), "Teriyaki ...");
    }

    #[test]
    fn wrap_packs_words_greedily() {
        let lines = wrap_text("Preheat oven to 350 degrees", 13);
        assert_eq!(lines, vec!["Preheat oven", "to 350", "degrees"]);
    }

    #[test]
    fn wrap_preserves_paragraph_breaks() {
        let lines = wrap_text("Step one.\nStep two.", 40);
        assert_eq!(lines, vec!["Step one.", "Step two."]);
    }
}
