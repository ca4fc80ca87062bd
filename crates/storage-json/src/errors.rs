//! Storage-specific error types for file operations.
//!
//! These errors are internal to the storage layer and are converted to
//! `equitytrack_core::Error` before being returned to callers.

use std::path::PathBuf;

use equitytrack_core::errors::{Error, PersistenceError};
use thiserror::Error;

/// Storage-specific errors that wrap IO and serde_json types.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode holdings: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ReadFailed { .. } => {
                Error::Persistence(PersistenceError::LoadFailed(err.to_string()))
            }
            StorageError::WriteFailed { .. } => {
                Error::Persistence(PersistenceError::SaveFailed(err.to_string()))
            }
            StorageError::Malformed { .. } | StorageError::Encode(_) => {
                Error::Persistence(PersistenceError::Serialization(err.to_string()))
            }
        }
    }
}
