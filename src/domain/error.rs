//! Error types for the Fluxline engine.
//!
//! This module defines the centralized error type [`FluxlineError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Fluxline operations.
///
/// This enum consolidates all error conditions that can occur while running the
/// launcher engine, from malformed interchange payloads to I/O failures. None of
/// the variants is fatal: every caller either recovers to the prior valid state
/// or falls back to a safe default, logging the condition as it does so.
///
/// # Examples
///
/// ```
/// use fluxline::FluxlineError;
///
/// fn reject_payload() -> Result<(), FluxlineError> {
///     Err(FluxlineError::DataFormat("payload is not a list".to_string()))
/// }
///
/// assert!(reject_payload().is_err());
/// ```
#[derive(Debug, Error)]
pub enum FluxlineError {
    /// Persisted or imported data does not have the expected shape.
    ///
    /// Occurs when an import payload is not a JSON array of records, or when the
    /// cached item file on disk cannot be parsed. The offending input is
    /// discarded and the previous valid state is kept.
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the persistence files fails.
    /// The in-memory item list stays authoritative and the write is retried
    /// when the store is dropped.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The bundled default dataset could not be loaded.
    ///
    /// Occurs at startup when no cached item list exists and the embedded
    /// starter data cannot be parsed. The engine starts with an empty item set.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Fluxline operations.
///
/// This is a type alias for `std::result::Result<T, FluxlineError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, FluxlineError>;
