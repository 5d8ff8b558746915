//! Error types for the document store

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document not found in the given collection
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// Atomic batch rejected; no staged update was applied
    #[error("commit rejected: {reason}")]
    CommitFailed { reason: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a not-found error
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Create a commit-failed error
    pub fn commit_failed(reason: impl Into<String>) -> Self {
        Self::CommitFailed {
            reason: reason.into(),
        }
    }

    /// Check if this error means the whole batch was rolled back
    pub fn is_commit_failure(&self) -> bool {
        matches!(self, Self::CommitFailed { .. })
    }
}
