//! Validation error types
//!
//! A `ValidationError` describes the first constraint an untrusted creation
//! payload violated. It is user-correctable and surfaces as HTTP 400 at the
//! REST boundary.

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// First violated constraint of a creation payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Payload was not a JSON object
    #[error("payload must be a JSON object")]
    NotAnObject,

    /// A required field was absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field was present with the wrong JSON type
    #[error("field '{field}' must be {expected}")]
    TypeMismatch {
        /// Offending field name (wire spelling)
        field: &'static str,
        /// Expected shape, human-readable
        expected: &'static str,
    },

    /// Claim was present but empty
    #[error("claim must not be empty")]
    EmptyClaim,

    /// Verdict string was not a member of the enumeration
    #[error("verdict must be one of safe, caution, danger, neutral (got '{0}')")]
    UnknownVerdict(String),

    /// Confidence score outside [0, 100]
    #[error("confidenceScore must be between 0 and 100 (got {0})")]
    ConfidenceOutOfRange(i64),
}
