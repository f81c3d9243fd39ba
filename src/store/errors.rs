//! Store error types
//!
//! `NotFound` is the only user-visible store failure; `LockPoisoned` is a
//! backing-medium fault and surfaces as HTTP 500, never silently swallowed.

use thiserror::Error;
use uuid::Uuid;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No live record with the given id
    #[error("Analysis not found: {0}")]
    NotFound(Uuid),

    /// A writer panicked while holding the collection lock
    #[error("store lock poisoned")]
    LockPoisoned,
}
