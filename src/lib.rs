//! factstore - a validated record store for fact-check analyses
//!
//! The core is the analysis record store: creation payloads are validated by
//! the schema module, persisted by the store, and read back through listing,
//! substring search, CSV export, and statistics aggregation. A thin axum
//! REST layer exposes the store to the UI.

pub mod cli;
pub mod export;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod schema;
pub mod stats;
pub mod store;
