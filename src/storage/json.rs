//! JSON file-based preference storage.
//!
//! This module provides the default [`PrefsStore`] implementation: a single
//! human-readable JSON file holding the Favorites Set and Theme Preference.
//! Writes are atomic (write-to-temp + rename) to prevent corruption if the
//! plugin is killed mid-save.
//!
//! The dataset is two small values, so the whole record lives in memory and is
//! rewritten on every mutation.

use crate::domain::error::{Result, ZrecipeError};
use crate::domain::prefs::{toggle_favorite, ThemeMode};
use crate::storage::backend::PrefsStore;
use crate::storage::models::PrefsRecord;
use std::path::PathBuf;

/// JSON file preference store.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is designed to be owned by the single
/// worker thread, matching the plugin architecture.
pub struct JsonPrefs {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory record, loaded on creation.
    data: PrefsRecord,

    /// Tracks whether data has been modified since the last save.
    dirty: bool,
}

impl JsonPrefs {
    /// Creates or opens a JSON preference store.
    ///
    /// If the file exists, loads the stored record; otherwise starts from the
    /// first-run defaults. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use zrecipe::storage::JsonPrefs;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonPrefs::new(PathBuf::from("/tmp/prefs.json"))?;
    /// # Ok::<(), zrecipe::domain::ZrecipeError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no stored preferences, starting from defaults");
            PrefsRecord::default()
        };

        tracing::debug!(
            favorite_count = data.favorites.len(),
            theme = %data.theme,
            "preference store initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads the record from a JSON file.
    fn load_from_file(path: &PathBuf) -> Result<PrefsRecord> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| ZrecipeError::Storage(format!("failed to parse JSON: {e}")))
    }

    /// Saves the record to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never left half-written. Stamps `updated_at` with the
    /// current time.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        self.data.updated_at = chrono::Utc::now().timestamp();

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ZrecipeError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PrefsStore for JsonPrefs {
    fn load(&self) -> Result<PrefsRecord> {
        Ok(self.data.clone())
    }

    fn toggle_favorite(&mut self, meal_id: &str) -> Result<Vec<String>> {
        let _span = tracing::debug_span!("json_toggle_favorite", meal_id = %meal_id).entered();

        let added = toggle_favorite(&mut self.data.favorites, meal_id);
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(
            added = added,
            favorite_count = self.data.favorites.len(),
            "favorite toggled"
        );
        Ok(self.data.favorites.clone())
    }

    fn set_theme(&mut self, theme: ThemeMode) -> Result<()> {
        let _span = tracing::debug_span!("json_set_theme", theme = %theme.as_str()).entered();

        self.data.theme = theme.as_str().to_string();
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("theme preference saved");
        Ok(())
    }
}

impl Drop for JsonPrefs {
    /// Flushes unsaved changes on drop.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save preferences on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::JsonPrefs;
    use crate::domain::prefs::ThemeMode;
    use crate::storage::backend::PrefsStore;

    fn store_in(dir: &tempfile::TempDir) -> JsonPrefs {
        JsonPrefs::new(dir.path().join("prefs.json")).unwrap()
    }

    #[test]
    fn missing_file_yields_first_run_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let record = store.load().unwrap();

        assert!(record.favorites.is_empty());
        assert_eq!(record.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn theme_survives_a_reload_cycle() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = store_in(&dir);
            store.set_theme(ThemeMode::Dark).unwrap();
        }

        let reopened = store_in(&dir);
        assert_eq!(reopened.load().unwrap().theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn favorites_survive_a_reload_cycle() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = store_in(&dir);
            store.toggle_favorite("52772").unwrap();
            store.toggle_favorite("52804").unwrap();
        }

        let reopened = store_in(&dir);
        assert_eq!(
            reopened.load().unwrap().favorites,
            vec!["52772".to_string(), "52804".to_string()]
        );
    }

    #[test]
    fn double_toggle_restores_the_stored_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.toggle_favorite("1").unwrap();
        store.toggle_favorite("2").unwrap();
        store.toggle_favorite("3").unwrap();

        store.toggle_favorite("2").unwrap();
        let favorites = store.toggle_favorite("2").unwrap();

        assert_eq!(favorites.len(), 3);
        let others: Vec<&String> = favorites.iter().filter(|f| *f != "2").collect();
        assert_eq!(others, vec!["1", "3"]);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(JsonPrefs::new(path).is_err());
    }
}
