//! Observability subsystem
//!
//! Structured JSON event logging: one log line per event, synchronous, with
//! deterministic key ordering.

mod logger;

pub use logger::{Logger, Severity};
