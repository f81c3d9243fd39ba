//! History aggregation
//!
//! Counts records per verdict and averages confidence across the whole
//! history. The verdict match is exhaustive, so adding a variant to
//! `Verdict` is a compile error here rather than a silently-missing bucket.

use serde::Serialize;

use crate::schema::{Analysis, Verdict};

/// Aggregate figures over a set of analysis records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Total number of records
    pub total: usize,
    /// Records with a safe verdict
    pub safe: usize,
    /// Records with a caution verdict
    pub caution: usize,
    /// Records with a danger verdict
    pub danger: usize,
    /// Records with a neutral verdict
    pub neutral: usize,
    /// Mean confidence score rounded to the nearest integer, 0 when empty
    pub avg_confidence: u8,
}

impl StatsSummary {
    /// Aggregate a set of records
    pub fn from_records(records: &[Analysis]) -> Self {
        let mut summary = Self {
            total: records.len(),
            safe: 0,
            caution: 0,
            danger: 0,
            neutral: 0,
            avg_confidence: 0,
        };

        let mut confidence_sum: u64 = 0;
        for record in records {
            match record.verdict {
                Verdict::Safe => summary.safe += 1,
                Verdict::Caution => summary.caution += 1,
                Verdict::Danger => summary.danger += 1,
                Verdict::Neutral => summary.neutral += 1,
            }
            confidence_sum += u64::from(record.confidence_score);
        }

        if !records.is_empty() {
            summary.avg_confidence =
                ((confidence_sum as f64 / records.len() as f64).round()) as u8;
        }

        summary
    }
}
