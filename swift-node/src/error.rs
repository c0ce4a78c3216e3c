//! Error handling for the SWIFT node

use thiserror::Error;

use crate::storage::StorageError;

/// Error types for the SWIFT node
#[derive(Error, Debug)]
pub enum Error {
    /// Parsing or validation failure from the core message library
    #[error(transparent)]
    Message(#[from] swift_msg::Error),

    /// Storage failure
    #[error("Storage error: {0}")]
    Storage(StorageError),

    /// No record with the given identifier
    #[error("MT799 record not found: {0}")]
    NotFound(i64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for SWIFT node operations
pub type Result<T> = std::result::Result<T, Error>;

/// Storage not-found is surfaced as the node's own `NotFound` so callers can
/// match on it without reaching into the storage layer.
impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(id) => Error::NotFound(id),
            other => Error::Storage(other),
        }
    }
}
