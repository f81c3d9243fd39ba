//! Analysis store subsystem
//!
//! The store is the sole owner of the live analysis collection and the only
//! mutation path. All read paths (get, list, search) observe the same
//! reverse-chronological ordering.
//!
//! # Invariants Enforced
//!
//! - Ids are unique across the store's full history and never reused
//! - A record is fully present or fully absent; no partial state is
//!   observable
//! - Records are immutable once persisted; delete is the only destructive
//!   operation
//! - Mutations serialize under a single writer lock

mod errors;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use memory::AnalysisStore;
