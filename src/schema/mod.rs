//! Analysis schema subsystem
//!
//! Defines the Analysis entity shape, the subset of fields accepted on
//! creation, and the validator that shapes untrusted input before it
//! reaches the store.
//!
//! # Design Principles
//!
//! - Validation happens once, at the boundary; the store trusts validated
//!   payloads and never re-checks them
//! - Out-of-range values are rejected, never clamped
//! - `id` and `analyzedAt` are store-assigned; caller-supplied values are
//!   stripped along with any other undeclared field
//! - Validation is deterministic and reports the first violated constraint

mod errors;
mod types;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use types::{Analysis, InsertAnalysis, Verdict};
pub use validator::validate_create;
