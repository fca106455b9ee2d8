//! Storage backend abstraction.
//!
//! This module defines the [`PrefsStore`] trait that abstracts over the
//! persistence backend for user preferences. The trait is minimal and maps
//! one-to-one onto the operations the worker thread performs; it is not a
//! generic key-value interface.

use crate::domain::error::Result;
use crate::domain::prefs::ThemeMode;
use crate::storage::models::PrefsRecord;

/// Abstraction over the persistent preference store.
///
/// Implementations persist the Favorites Set and Theme Preference across plugin
/// sessions. Every mutating operation persists before returning.
///
/// # Implementations
///
/// - [`JsonPrefs`](crate::storage::JsonPrefs): JSON file with atomic writes
///   (default)
pub trait PrefsStore: Send {
    /// Loads the current preference record.
    ///
    /// A backend with no stored state returns the first-run defaults (empty
    /// favorites, light theme) rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn load(&self) -> Result<PrefsRecord>;

    /// Toggles a recipe id in the Favorites Set and persists the result.
    ///
    /// If the id is present it is removed, preserving the order of the other
    /// members; otherwise it is appended. Returns the updated sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn toggle_favorite(&mut self, meal_id: &str) -> Result<Vec<String>>;

    /// Overwrites the persisted theme preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn set_theme(&mut self, theme: ThemeMode) -> Result<()>;
}
