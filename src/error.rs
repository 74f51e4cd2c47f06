//! Custom error types for Mailroom
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Mailroom operations
#[derive(Error, Debug)]
pub enum MailroomError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Report or letter export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The console input was closed while waiting for a response
    #[error("Input closed")]
    InputClosed,
}

impl MailroomError {
    /// Create a "not found" error for donors
    pub fn donor_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Donor",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the console input has been closed
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for MailroomError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MailroomError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for MailroomError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Mailroom operations
pub type MailroomResult<T> = Result<T, MailroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MailroomError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = MailroomError::donor_not_found("donor_9");
        assert_eq!(err.to_string(), "Donor not found: donor_9");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_input_closed() {
        let err = MailroomError::InputClosed;
        assert!(err.is_input_closed());
        assert_eq!(err.to_string(), "Input closed");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let mailroom_err: MailroomError = io_err.into();
        assert!(matches!(mailroom_err, MailroomError::Io(_)));
    }
}
