//! # Error Types
//!
//! Structured error types for coldload_core.
//!
//! The load engine itself never fails: missing or unparseable fields fall back
//! to documented defaults and unknown reference keys fall back to a documented
//! table entry. These errors surface from the stricter paths only, namely
//! input validation ([`FacilityForm::compute_validated`]), strict reference
//! lookups and file I/O.
//!
//! [`FacilityForm::compute_validated`]: crate::calculations::FacilityForm::compute_validated
//!
//! ## Example
//!
//! ```rust
//! use coldload_core::errors::{CalcError, CalcResult};
//!
//! fn validate_hours(hours: f64) -> CalcResult<()> {
//!     if !(0.0..=24.0).contains(&hours) {
//!         return Err(CalcError::InvalidInput {
//!             field: "operating_hours".to_string(),
//!             value: hours.to_string(),
//!             reason: "Operating hours must be between 0 and 24".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for coldload_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-physical, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A reference table key (product, insulation, storage type) is unknown
    #[error("Unknown {table} entry: {key}")]
    UnknownReference { table: String, key: String },

    /// Validated input produced a non-finite load
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
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

    /// Schema version mismatch in a saved result file
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownReference error
    pub fn unknown_reference(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::UnknownReference {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
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

    /// Whether the caller can fix this by editing the input record
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::UnknownReference { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownReference { .. } => "UNKNOWN_REFERENCE",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
