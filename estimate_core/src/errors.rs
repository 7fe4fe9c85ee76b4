//! # Error Types
//!
//! Structured error types for estimate_core. Lookup misses surface as
//! dedicated `*NotFound` variants carrying the id that was requested, so
//! callers can report exactly which table entry was missing.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::errors::{CalcError, CalcResult};
//!
//! fn require_service(id: u32, known: &[u32]) -> CalcResult<()> {
//!     if !known.contains(&id) {
//!         return Err(CalcError::service_not_found(id));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_service(7, &[1, 2]).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estimate_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for estimation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// No service with the requested id
    #[error("Service not found: id {id}")]
    ServiceNotFound { id: u32 },

    /// No quality level with the requested id
    #[error("Quality not found: id {id}")]
    QualityNotFound { id: u32 },

    /// No urgency level with the requested id
    #[error("Urgency not found: id {id}")]
    UrgencyNotFound { id: u32 },

    /// No building quality factor with the requested id
    #[error("Quality factor not found: id {id}")]
    QualityFactorNotFound { id: u32 },

    /// An input value is invalid (duplicate table id, malformed record)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    pub fn service_not_found(id: u32) -> Self {
        CalcError::ServiceNotFound { id }
    }

    pub fn quality_not_found(id: u32) -> Self {
        CalcError::QualityNotFound { id }
    }

    pub fn urgency_not_found(id: u32) -> Self {
        CalcError::UrgencyNotFound { id }
    }

    pub fn quality_factor_not_found(id: u32) -> Self {
        CalcError::QualityFactorNotFound { id }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for any of the reference-table lookup misses
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CalcError::ServiceNotFound { .. }
                | CalcError::QualityNotFound { .. }
                | CalcError::UrgencyNotFound { .. }
                | CalcError::QualityFactorNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::ServiceNotFound { .. } => "SERVICE_NOT_FOUND",
            CalcError::QualityNotFound { .. } => "QUALITY_NOT_FOUND",
            CalcError::UrgencyNotFound { .. } => "URGENCY_NOT_FOUND",
            CalcError::QualityFactorNotFound { .. } => "QUALITY_FACTOR_NOT_FOUND",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::quality_not_found(999);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("QualityNotFound"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CalcError::service_not_found(999).to_string(), "Service not found: id 999");
        assert_eq!(CalcError::urgency_not_found(4).to_string(), "Urgency not found: id 4");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::service_not_found(1).error_code(), "SERVICE_NOT_FOUND");
        assert_eq!(CalcError::quality_factor_not_found(1).error_code(), "QUALITY_FACTOR_NOT_FOUND");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_not_found_classification() {
        assert!(CalcError::urgency_not_found(2).is_not_found());
        assert!(!CalcError::invalid_input("id", "1", "duplicate").is_not_found());
    }
}
