//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin. Two palettes
//! are built in (`light` and `dark`, matching the two values of the persisted
//! [`ThemeMode`](crate::domain::ThemeMode)) and either can be replaced by a
//! custom TOML file via the plugin configuration. Utilities convert hex colors
//! to 24-bit ANSI escape sequences.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#4c4f69"
//! selection_fg = "#eff1f5"
//! selection_bg = "#ea76cb"
//! text_normal = "#4c4f69"
//! text_dim = "#9ca0b0"
//! border = "#bcc0cc"
//! search_bar_border = "#ea76cb"
//! favorite_fg = "#d20f39"
//! empty_state_fg = "#1e66f5"
//! loading_fg = "#df8e1d"
//! overlay_border = "#8839ef"
//! link_fg = "#1e66f5"
//! ```

use crate::domain::error::{Result, ZrecipeError};
use crate::domain::prefs::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Loaded from the built-in
/// palettes or from custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#4c4f69").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card foreground color.
    pub selection_fg: String,
    /// Selected card background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info, placeholders).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,

    /// Liked-marker color on favorited cards.
    pub favorite_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Loading indicator color.
    pub loading_fg: String,

    /// Detail overlay border color.
    pub overlay_border: String,

    /// Source link color in the detail overlay.
    pub link_fg: String,
}

impl Theme {
    /// Loads the built-in palette for a theme mode.
    ///
    /// # Panics
    ///
    /// Panics if a built-in theme file fails to parse (a build defect, not a
    /// runtime condition).
    #[must_use]
    pub fn builtin(mode: ThemeMode) -> Self {
        let toml_str = match mode {
            ThemeMode::Light => include_str!("../../themes/light.toml"),
            ThemeMode::Dark => include_str!("../../themes/dark.toml"),
        };

        toml::from_str(toml_str).expect("built-in theme should always parse")
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ZrecipeError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed (invalid syntax, missing fields, type
    /// mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ZrecipeError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| ZrecipeError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present, validates length, and parses hex digits.
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in light palette, the first-run default.
    fn default() -> Self {
        Self::builtin(ThemeMode::Light)
    }
}

/// Both built-in (or user-overridden) palettes, ready to swap on theme toggle.
///
/// The active palette is selected by the persisted [`ThemeMode`]; the pair is
/// loaded once at startup so toggling never touches the filesystem.
#[derive(Debug, Clone)]
pub struct ThemePair {
    /// Palette used in light mode.
    pub light: Theme,
    /// Palette used in dark mode.
    pub dark: Theme,
}

impl ThemePair {
    /// Returns the palette for a mode.
    #[must_use]
    pub const fn for_mode(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for ThemePair {
    fn default() -> Self {
        Self {
            light: Theme::builtin(ThemeMode::Light),
            dark: Theme::builtin(ThemeMode::Dark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Theme, ThemePair};
    use crate::domain::ThemeMode;

    #[test]
    fn builtin_palettes_parse() {
        assert_eq!(Theme::builtin(ThemeMode::Light).name, "light");
        assert_eq!(Theme::builtin(ThemeMode::Dark).name, "dark");
    }

    #[test]
    fn pair_selects_by_mode() {
        let pair = ThemePair::default();
        assert_eq!(pair.for_mode(ThemeMode::Dark).name, "dark");
        assert_eq!(pair.for_mode(ThemeMode::Light).name, "light");
    }

    #[test]
    fn hex_colors_become_ansi_sequences() {
        assert_eq!(Theme::fg("#ff0000"), "\u{001b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("00ff00"), "\u{001b}[48;2;0;255;0m");
        // malformed input falls back to white rather than corrupting output
        assert_eq!(Theme::fg("#abc"), "\u{001b}[38;2;255;255;255m");
    }
}
