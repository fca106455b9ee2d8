//! Error types for the zrecipe plugin.
//!
//! This module defines the centralized error type [`ZrecipeError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Network and parse failures share one fate in the UI: they are logged and the
//! affected view falls back to its empty or unchanged state. The error variants
//! exist so call sites can log precisely, not so users see different messages.

use thiserror::Error;

/// The main error type for zrecipe plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from remote API failures to storage and configuration issues.
///
/// # Examples
///
/// ```
/// use zrecipe::domain::ZrecipeError;
///
/// fn validate_config() -> Result<(), ZrecipeError> {
///     Err(ZrecipeError::Config("missing api_base".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZrecipeError {
    /// The remote API answered with a non-success HTTP status.
    ///
    /// Carries the status code reported by the runtime. A status of `0`
    /// indicates the request never produced a response (transport failure).
    #[error("HTTP error: status {status}")]
    Http {
        /// Status code of the failed response.
        status: u16,
    },

    /// A response body could not be decoded as the expected JSON shape.
    ///
    /// The string contains the underlying serde error description.
    #[error("Response parse error: {0}")]
    Parse(String),

    /// A lookup-by-id request matched no record at the remote source.
    ///
    /// Treated identically to a network failure by the UI: logged, and the
    /// detail overlay does not open.
    #[error("no recipe matched the requested id")]
    NotFound,

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the preferences backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zrecipe operations.
///
/// This is a type alias for `std::result::Result<T, ZrecipeError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZrecipeError>;
