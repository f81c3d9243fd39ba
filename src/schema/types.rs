//! Analysis entity types
//!
//! `Analysis` is the unit of persistence; `InsertAnalysis` is the validated
//! creation payload (everything the caller may set). Wire format is
//! camelCase JSON to match the UI client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed classification outcome of an analysis.
///
/// Exactly four variants; no other value is representable. Consumers that
/// branch on the verdict (formatter, statistics) match exhaustively so a new
/// variant is a compile error at every consumption site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Claim is supported by evidence
    Safe,
    /// Claim is partially supported or misleading
    Caution,
    /// Claim is contradicted by evidence
    Danger,
    /// No determination could be made
    Neutral,
}

impl Verdict {
    /// All verdict values, in display order.
    pub const ALL: [Verdict; 4] = [
        Verdict::Safe,
        Verdict::Caution,
        Verdict::Danger,
        Verdict::Neutral,
    ];

    /// Returns the lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Caution => "caution",
            Verdict::Danger => "danger",
            Verdict::Neutral => "neutral",
        }
    }

    /// Parse a wire name into a verdict, `None` for anything else
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "safe" => Some(Verdict::Safe),
            "caution" => Some(Verdict::Caution),
            "danger" => Some(Verdict::Danger),
            "neutral" => Some(Verdict::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted analysis record.
///
/// `id` and `analyzed_at` are assigned by the store at creation and never
/// mutated. Records are immutable value objects once persisted; delete is
/// the only destructive operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Store-assigned unique identifier (never reused)
    pub id: Uuid,
    /// The statement being checked (non-empty)
    pub claim: String,
    /// Optional caller-supplied context for the claim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Classification outcome
    pub verdict: Verdict,
    /// Free text explaining the verdict
    pub reasoning: String,
    /// Confidence in the verdict, integer in [0, 100]
    pub confidence_score: u8,
    /// Whether heightened-scrutiny analysis was requested
    pub impact_mode: bool,
    /// Store-assigned creation timestamp
    pub analyzed_at: DateTime<Utc>,
    /// Optional ordered source references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_urls: Option<Vec<String>>,
}

/// The validated creation payload.
///
/// Deliberately excludes `id` and `analyzed_at` — the store assigns both.
/// Only `schema::validate_create` produces values of this type from
/// untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAnalysis {
    /// The statement being checked (non-empty)
    pub claim: String,
    /// Optional caller-supplied context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Classification outcome
    pub verdict: Verdict,
    /// Free text explaining the verdict
    pub reasoning: String,
    /// Confidence in the verdict, integer in [0, 100]
    pub confidence_score: u8,
    /// Whether heightened-scrutiny analysis was requested
    pub impact_mode: bool,
    /// Optional ordered source references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_urls: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_wire_names_round_trip() {
        for v in Verdict::ALL {
            assert_eq!(Verdict::parse(v.as_str()), Some(v));
        }
    }

    #[test]
    fn test_verdict_rejects_unknown_names() {
        assert_eq!(Verdict::parse("true"), None);
        assert_eq!(Verdict::parse("SAFE"), None);
        assert_eq!(Verdict::parse(""), None);
    }

    #[test]
    fn test_verdict_serde_lowercase() {
        let json = serde_json::to_string(&Verdict::Danger).unwrap();
        assert_eq!(json, "\"danger\"");

        let parsed: Verdict = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(parsed, Verdict::Neutral);
    }

    #[test]
    fn test_analysis_wire_format_is_camel_case() {
        let record = Analysis {
            id: Uuid::new_v4(),
            claim: "water boils at 100C".to_string(),
            context: None,
            verdict: Verdict::Safe,
            reasoning: "standard pressure assumed".to_string(),
            confidence_score: 95,
            impact_mode: false,
            analyzed_at: Utc::now(),
            source_urls: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("confidenceScore"));
        assert!(obj.contains_key("impactMode"));
        assert!(obj.contains_key("analyzedAt"));
        // Absent optionals are omitted, not serialized as null
        assert!(!obj.contains_key("context"));
        assert!(!obj.contains_key("sourceUrls"));
    }
}
