//! Error types for the zemoji plugin.
//!
//! This module defines the centralized error type [`PickerError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for zemoji plugin operations.
///
/// Only [`PickerError::Dataset`] is treated as unrecoverable. Storage failures are
/// logged by the picker controller and never reach the plugin runtime.
///
/// # Examples
///
/// ```
/// use zemoji::PickerError;
///
/// fn read_store() -> Result<(), PickerError> {
///     Err(PickerError::Storage("store unavailable".to_string()))
/// }
///
/// assert!(read_store().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PickerError {
    /// Durable store operation failed.
    ///
    /// Covers unreadable or unwritable store files and serialization failures
    /// of persisted values.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The emoji dataset could not be parsed.
    ///
    /// The bundled dataset is compiled into the plugin, so this only occurs for
    /// a broken build or a malformed user-supplied `dataset_file`.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for zemoji operations.
pub type Result<T> = std::result::Result<T, PickerError>;
