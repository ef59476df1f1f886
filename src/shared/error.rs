//! Shared Error Types
//!
//! Errors raised around the message view: loading conversations from disk,
//! validating records handed to collaborators, and exporting result sets.
//! The view itself never fails; these belong to the code that feeds it.
//!
//! # Usage
//!
//! ```rust
//! use querychat::shared::error::SharedError;
//!
//! let error = SharedError::export("message has no columns");
//! assert!(error.to_string().contains("no columns"));
//! ```
use thiserror::Error;

/// Error types shared by the host application and its collaborators
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A conversation file could not be read
    #[error("IO error reading '{path}': {message}")]
    IoError {
        /// File that was being read
        path: String,
        /// Human-readable error message
        message: String,
    },

    /// Result set could not be exported
    #[error("Export error: {message}")]
    ExportError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new IO error for `path`
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new export error
    pub fn export(message: impl Into<String>) -> Self {
        Self::ExportError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
