use thiserror::Error;

/// Errors reported by the profile and image store adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record for the requested user
    #[error("Profile not found")]
    NotFound,

    /// Session token missing or refused
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// Backend unreachable
    #[error("Connection error: {0}")]
    Connection(String),

    /// Object storage refused the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Adapter bug or unexpected state
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result alias for store adapters
pub type StoreResult<T> = std::result::Result<T, StoreError>;
