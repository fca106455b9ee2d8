//! Storage layer for persistent user preferences.
//!
//! This module persists the two pieces of user state that outlive a plugin
//! session: the Favorites Set and the Theme Preference. It uses a single JSON
//! file with atomic writes, accessed only from the worker thread.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `models`: On-disk record types

pub mod backend;
pub mod json;
pub mod models;

pub use backend::PrefsStore;
pub use json::JsonPrefs;
pub use models::PrefsRecord;
