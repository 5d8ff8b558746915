//! Error types for the panel engine

use taskpanel_store::StoreError;
use thiserror::Error;

/// Result type for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;

/// Errors that can occur in panel operations
#[derive(Debug, Error)]
pub enum PanelError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// List not found
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// User not found
    #[error("user not found: {id}")]
    UserNotFound { id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Rejected login attempt
    #[error("incorrect username or password")]
    InvalidCredentials,

    /// Store-level failure, including rejected atomic batches
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Store(StoreError::Json(err))
    }
}

impl PanelError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error is a rejected batch commit.
    ///
    /// A rejected commit applied nothing; every document still holds its
    /// pre-operation state.
    pub fn is_commit_failure(&self) -> bool {
        matches!(self, Self::Store(err) if err.is_commit_failure())
    }
}
