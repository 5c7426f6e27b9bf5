//! Error types for store operations.

use thiserror::Error;

/// A specialized Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error types for store operations.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// No object exists under the requested key.
    #[error("Object not found: {key}")]
    NotFound {
        /// Serialized form of the missing key.
        key: String,
    },

    /// A stored document could not be interpreted as the requested type.
    #[error("Invalid document under {key}: {reason}")]
    InvalidDocument {
        /// Serialized form of the key.
        key: String,
        /// Description of the failure.
        reason: String,
    },
}

impl StoreError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Creates an invalid document error.
    #[must_use]
    pub fn invalid_document(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
