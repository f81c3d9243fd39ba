//! CSV report rendering
//!
//! One header row, one row per record in caller order (normally the store's
//! listing order). Dates are RFC 3339 with millisecond precision so rows
//! sort lexicographically by time. Claims are double-quoted with internal
//! quotes doubled, so commas or quotes in a claim cannot shift columns. No
//! row is omitted or truncated regardless of content length.

use chrono::SecondsFormat;

use crate::schema::Analysis;

/// Fixed header row
pub const CSV_HEADER: &str = "Date,Claim,Verdict,Confidence,Impact Mode";

/// Render records as a delimited text report.
///
/// Rows are joined by `\n` with no trailing newline.
pub fn to_delimited_text(records: &[Analysis]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for record in records {
        lines.push(format!(
            "{},{},{},{},{}",
            record
                .analyzed_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            quote(&record.claim),
            record.verdict,
            record.confidence_score,
            record.impact_mode,
        ));
    }

    lines.join("\n")
}

/// Double-quote a field, doubling internal quote characters
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
