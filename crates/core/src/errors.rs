//! Core error types for the portfolio tracker.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (file IO, JSON parsing, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio core.
///
/// Zero denominators in percentage and allocation math are not represented
/// here: they resolve to zero and never surface as failures.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Holding '{0}' not found")]
    NotFound(String),

    #[error("Persistence operation failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Portfolio data has not been loaded")]
    NotLoaded,
}

/// Validation errors raised before a record enters the holding set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Holding '{0}' already exists")]
    DuplicateSymbol(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Value, cost, gain or gain percentage would exceed the Decimal range.
    #[error("Values of holding '{0}' are out of range")]
    OutOfRange(String),
}

/// Storage-agnostic error type for persistence operations.
///
/// Uses `String` for all details so that each storage adapter can convert
/// its own error type into this format.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// Reading records from the store failed.
    #[error("Failed to load {0}")]
    LoadFailed(String),

    /// Writing the holding set to the store failed.
    #[error("Failed to save {0}")]
    SaveFailed(String),

    /// Stored data could not be encoded or decoded.
    #[error("Malformed data: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Persistence(PersistenceError::Serialization(err.to_string()))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Self {
        Error::Validation(ValidationError::InvalidDate(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

impl Error {
    /// Returns true when the error came from the persistence collaborator.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }
}
