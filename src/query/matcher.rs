//! Free-text record matching
//!
//! Case-insensitive substring test against claim and reasoning. No
//! stemming, tokenization, or ranking; history sizes are small and the
//! stored order already serves as the display order.

use crate::schema::Analysis;

/// Whether a record matches a free-text query.
///
/// The query matches if it appears as a case-insensitive substring of the
/// claim OR the reasoning. An empty query matches every record, which makes
/// `search("")` equivalent to listing everything.
pub fn matches(record: &Analysis, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    record.claim.to_lowercase().contains(&needle)
        || record.reasoning.to_lowercase().contains(&needle)
}
