//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Calendar event not found
    #[error("event not found: {id}")]
    EventNotFound { id: String },

    /// Generic document not found in a store collection
    #[error("{collection} document not found: {id}")]
    DocumentNotFound { collection: String, id: String },

    /// Invalid field value (rejected before any remote call)
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Index outside the bounds of a column's task sequence
    #[error("index {index} out of range for column with {len} tasks")]
    IndexOutOfRange { index: usize, len: usize },

    /// The remote store rejected or failed an operation
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a store-unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Check if this error was raised before any remote write was attempted
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidValue { .. } | Self::IndexOutOfRange { .. }
        )
    }
}
