//! Query/search subsystem
//!
//! Decides whether a record matches a free-text query. Matching is binary;
//! ordering is always the store's reverse-chronological order, never
//! relevance order.

mod matcher;

pub use matcher::matches;
