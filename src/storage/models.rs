//! Storage record models for the persistence layer.
//!
//! This module defines the on-disk shape of the two persisted user preferences.
//! The record is deliberately permissive on load: any missing field falls back
//! to its first-run default so older or hand-edited files keep working.

use crate::domain::prefs::ThemeMode;
use serde::{Deserialize, Serialize};

/// Current storage format version.
const FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    FORMAT_VERSION
}

fn default_theme() -> String {
    ThemeMode::Light.as_str().to_string()
}

/// Persisted preference record.
///
/// Serialized as a single JSON object:
///
/// ```json
/// {
///   "version": 1,
///   "favorites": ["52772", "52804"],
///   "theme": "dark",
///   "updated_at": 1733390000
/// }
/// ```
///
/// `favorites` is an ordered sequence with set membership semantics; the
/// toggle operation never introduces duplicates. `theme` holds the persisted
/// string form of [`ThemeMode`]; unknown values load as light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefsRecord {
    /// Storage format version for future migrations.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Favorited recipe identifiers, in the order they were added.
    #[serde(default)]
    pub favorites: Vec<String>,

    /// Persisted theme string (`"light"` or `"dark"`).
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Unix timestamp of the last save, stamped on every write.
    #[serde(default)]
    pub updated_at: i64,
}

impl Default for PrefsRecord {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            favorites: Vec::new(),
            theme: default_theme(),
            updated_at: 0,
        }
    }
}

impl PrefsRecord {
    /// Returns the persisted theme as a [`ThemeMode`], falling back to light
    /// for unrecognized strings.
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::parse(&self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::PrefsRecord;
    use crate::domain::ThemeMode;

    #[test]
    fn missing_fields_load_as_first_run_defaults() {
        let record: PrefsRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.version, 1);
        assert!(record.favorites.is_empty());
        assert_eq!(record.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn unknown_theme_string_falls_back_to_light() {
        let record: PrefsRecord =
            serde_json::from_str(r#"{"theme": "sepia"}"#).unwrap();
        assert_eq!(record.theme_mode(), ThemeMode::Light);
    }
}
