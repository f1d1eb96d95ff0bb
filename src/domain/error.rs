//! Error types for the AstraFind core.
//!
//! This module defines the centralized error type [`AstraFindError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Note that the single user-facing error surface of the application (the store's
//! `error` field, see [`crate::app::AppStore`]) is a plain string by contract; the
//! variants here are the typed errors used at construction and I/O boundaries.

use thiserror::Error;

/// The main error type for AstraFind operations.
///
/// This enum consolidates all error conditions that can occur in the core, from
/// persisted-state storage to configuration parsing and retrieval failures. Most
/// variants carry a description string; I/O errors convert automatically via
/// `#[from]`.
///
/// # Examples
///
/// ```
/// use astrafind::domain::AstraFindError;
///
/// fn validate_config() -> Result<(), AstraFindError> {
///     Err(AstraFindError::Config("missing data directory".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum AstraFindError {
    /// Persisted-state storage operation failed.
    ///
    /// Occurs when reading, writing, or migrating the preferences file fails.
    /// The string contains a description of what went wrong.
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file cannot be read or parsed, or when a
    /// required value is malformed. The string describes the specific problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Retrieval failed.
    ///
    /// Raised by [`Retriever`](crate::retrieval::Retriever) implementations when a
    /// search cannot be served. The store catches this at the `search` boundary and
    /// converts it to the fixed user-facing error string.
    #[error("search error: {0}")]
    Search(String),

    /// A table preview is malformed.
    ///
    /// Occurs when a table preview's rows do not all match its header width.
    #[error("malformed table preview: {0}")]
    Table(String),
}

/// A specialized `Result` type for AstraFind operations.
///
/// This is a type alias for `std::result::Result<T, AstraFindError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use astrafind::domain::Result;
///
/// fn load_preferences() -> Result<()> {
///     Ok(())
/// }
/// # load_preferences().unwrap();
/// ```
pub type Result<T> = std::result::Result<T, AstraFindError>;
