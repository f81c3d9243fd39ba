//! Statistics subsystem
//!
//! Aggregates the analysis history into per-verdict counts and an average
//! confidence figure for the stats view.

mod summary;

pub use summary::StatsSummary;
