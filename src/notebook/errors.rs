//! Custom error types for notebook processing

use std::fmt;
use std::io;

/// Notebook-specific error types
#[derive(Debug)]
pub enum NotebookError {
    /// I/O error
    IoError(io::Error),
    /// Document is not valid JSON or lacks a required field
    JsonError(serde_json::Error),
    /// Embedded payload is not valid base64 text
    Base64Error(base64::DecodeError),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for NotebookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotebookError::IoError(e) => write!(f, "I/O error: {}", e),
            NotebookError::JsonError(e) => write!(f, "Invalid notebook document: {}", e),
            NotebookError::Base64Error(e) => write!(f, "Invalid base64 payload: {}", e),
            NotebookError::GenericError(msg) => write!(f, "Notebook error: {}", msg),
        }
    }
}

impl std::error::Error for NotebookError {}

impl From<io::Error> for NotebookError {
    fn from(error: io::Error) -> Self {
        NotebookError::IoError(error)
    }
}

impl From<serde_json::Error> for NotebookError {
    fn from(error: serde_json::Error) -> Self {
        NotebookError::JsonError(error)
    }
}

impl From<base64::DecodeError> for NotebookError {
    fn from(error: base64::DecodeError) -> Self {
        NotebookError::Base64Error(error)
    }
}

impl From<String> for NotebookError {
    fn from(msg: String) -> Self {
        NotebookError::GenericError(msg)
    }
}

/// Result type for notebook operations
pub type NotebookResult<T> = Result<T, NotebookError>;
