//! User preference types: theme mode and favorites membership.
//!
//! This module defines [`ThemeMode`], the two-valued persisted display mode, and
//! the order-preserving toggle operation on the Favorites Set. Both pieces of
//! state are loaded once at startup and persisted on every mutation; the types
//! here carry the semantics, the storage layer carries the I/O.

use serde::{Deserialize, Serialize};

/// Persisted display mode preference.
///
/// Always exactly one of the two values. An unrecognized persisted string is
/// treated as [`ThemeMode::Light`], the first-run default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light palette (first-run default).
    Light,
    /// Dark palette.
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

impl ThemeMode {
    /// Returns the persisted string form (`"light"` or `"dark"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted string, falling back to `Light` on anything
    /// unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use zrecipe::domain::ThemeMode;
    ///
    /// assert_eq!(ThemeMode::parse("dark"), ThemeMode::Dark);
    /// assert_eq!(ThemeMode::parse("solarized"), ThemeMode::Light);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns the theme-toggle glyph for the header control.
    ///
    /// Shows the sun while dark is active (the switch-to-light affordance)
    /// and the moon otherwise.
    #[must_use]
    pub const fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }
}

/// Toggles an identifier's membership in the Favorites Set.
///
/// If `id` is present it is removed, preserving the relative order of the
/// remaining members; otherwise it is appended at the end. Returns `true` if
/// the id was added, `false` if it was removed.
///
/// Two consecutive calls with the same id restore the sequence to its original
/// contents and ordering.
///
/// # Examples
///
/// ```
/// use zrecipe::domain::toggle_favorite;
///
/// let mut favorites = vec!["52772".to_string(), "52804".to_string()];
/// assert!(!toggle_favorite(&mut favorites, "52772"));
/// assert_eq!(favorites, vec!["52804".to_string()]);
/// assert!(toggle_favorite(&mut favorites, "52772"));
/// assert_eq!(favorites, vec!["52804".to_string(), "52772".to_string()]);
/// ```
pub fn toggle_favorite(favorites: &mut Vec<String>, id: &str) -> bool {
    if let Some(position) = favorites.iter().position(|fav| fav == id) {
        favorites.remove(position);
        false
    } else {
        favorites.push(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{toggle_favorite, ThemeMode};

    #[test]
    fn toggle_twice_restores_contents_and_ordering() {
        let original = vec![
            "52772".to_string(),
            "52804".to_string(),
            "52855".to_string(),
        ];

        let mut favorites = original.clone();
        toggle_favorite(&mut favorites, "52804");
        assert_eq!(favorites, vec!["52772".to_string(), "52855".to_string()]);
        toggle_favorite(&mut favorites, "52804");

        assert_eq!(favorites.len(), original.len());
        // the untouched members keep their relative order
        let others: Vec<&String> = favorites.iter().filter(|f| *f != "52804").collect();
        assert_eq!(others, vec!["52772", "52855"]);
    }

    #[test]
    fn toggle_appends_new_ids_at_the_end() {
        let mut favorites = vec!["1".to_string()];
        assert!(toggle_favorite(&mut favorites, "2"));
        assert_eq!(favorites, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn toggle_never_creates_duplicates() {
        let mut favorites = vec!["1".to_string()];
        toggle_favorite(&mut favorites, "1");
        toggle_favorite(&mut favorites, "1");
        assert_eq!(favorites, vec!["1".to_string()]);
    }

    #[test]
    fn theme_mode_round_trips_and_falls_back() {
        assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), ThemeMode::Dark);
        assert_eq!(
            ThemeMode::parse(ThemeMode::Light.as_str()),
            ThemeMode::Light
        );
        assert_eq!(ThemeMode::parse(""), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("purple"), ThemeMode::Light);
    }

    #[test]
    fn toggle_glyph_advertises_the_other_mode() {
        assert_eq!(ThemeMode::Dark.toggle_glyph(), "☀");
        assert_eq!(ThemeMode::Light.toggle_glyph(), "🌙");
    }
}
