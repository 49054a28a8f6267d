//! Error types for securestore

use thiserror::Error;

use crate::backend::Backend;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Store error types
///
/// Every failure is surfaced once, synchronously; there is no retry policy
/// anywhere in this crate.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("backend {requested:?} is invalid, expected one of: [{}]", Backend::allowed_ids().join(", "))]
    InvalidBackend { requested: String },

    #[error("backend {backend} is valid but is not available on the current OS")]
    BackendUnavailable { backend: Backend },

    #[error("failed to open secure store: {0}")]
    OpenStore(String),

    #[error("credentials are too large for Windows Credential Manager: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("codec error: {0}")]
    Codec(#[from] std::io::Error),

    #[error("failed to write to secure store: {0}")]
    WriteStore(String),

    #[error("failed to read from secure store: {0}")]
    ReadStore(String),

    #[error("failed to remove from secure store: {0}")]
    RemoveStore(String),
}
