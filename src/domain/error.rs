//! Error types for the zuggest plugin.
//!
//! This module defines the centralized error type [`ZuggestError`] and a type alias
//! [`Result`] used throughout the crate. Filtering and navigation are total, so
//! errors only originate at the edges: persistence, catalog loading, themes and
//! configuration.

use thiserror::Error;

/// The main error type for zuggest operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use zuggest::ZuggestError;
///
/// fn read_slot() -> Result<(), ZuggestError> {
///     Err(ZuggestError::Storage("slot unavailable".to_string()))
/// }
/// assert!(read_slot().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ZuggestError {
    /// Key-value store operation failed.
    ///
    /// Raised by store backends when the persisted slot cannot be read,
    /// written or parsed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The item catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zuggest operations.
pub type Result<T> = std::result::Result<T, ZuggestError>;
