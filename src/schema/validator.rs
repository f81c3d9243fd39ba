//! Creation payload validator
//!
//! Walks an untyped JSON payload field by field and either yields a
//! well-typed `InsertAnalysis` or fails with the first violated constraint.
//!
//! Semantics:
//! - Required: claim (non-empty string), verdict (enum member), reasoning
//!   (string), confidenceScore (integral number in [0, 100]), impactMode
//!   (boolean)
//! - Optional: context (string), sourceUrls (array of strings)
//! - Undeclared fields, including caller-supplied `id` and `analyzedAt`,
//!   are stripped rather than rejected
//! - No coercion, no clamping, no defaults

use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};
use super::types::{InsertAnalysis, Verdict};

/// Validates an untrusted creation payload.
///
/// Returns the well-typed creation payload on success. Fails with a
/// `ValidationError` describing the first violated constraint; nothing is
/// persisted on failure.
pub fn validate_create(input: &Value) -> ValidationResult<InsertAnalysis> {
    let obj = input.as_object().ok_or(ValidationError::NotAnObject)?;

    let claim = require_string(obj, "claim")?;
    if claim.is_empty() {
        return Err(ValidationError::EmptyClaim);
    }

    let verdict_raw = require_string(obj, "verdict")?;
    let verdict = Verdict::parse(verdict_raw)
        .ok_or_else(|| ValidationError::UnknownVerdict(verdict_raw.to_string()))?;

    let reasoning = require_string(obj, "reasoning")?;

    let confidence_score = require_confidence(obj)?;

    let impact_mode = match obj.get("impactMode") {
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            return Err(ValidationError::TypeMismatch {
                field: "impactMode",
                expected: "a boolean",
            })
        }
        None => return Err(ValidationError::MissingField("impactMode")),
    };

    let context = optional_string(obj, "context")?;
    let source_urls = optional_string_array(obj, "sourceUrls")?;

    Ok(InsertAnalysis {
        claim: claim.to_string(),
        context,
        verdict,
        reasoning: reasoning.to_string(),
        confidence_score,
        impact_mode,
        source_urls,
    })
}

fn require_string<'a>(
    obj: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> ValidationResult<&'a str> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationError::TypeMismatch {
            field,
            expected: "a string",
        }),
        None => Err(ValidationError::MissingField(field)),
    }
}

/// Confidence must be an integral JSON number (55 and 55.0 pass, 55.5 does
/// not) inside [0, 100]. Rejected, never clamped.
fn require_confidence(obj: &serde_json::Map<String, Value>) -> ValidationResult<u8> {
    let value = obj
        .get("confidenceScore")
        .ok_or(ValidationError::MissingField("confidenceScore"))?;

    let score = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    f as i64
                } else {
                    return Err(ValidationError::TypeMismatch {
                        field: "confidenceScore",
                        expected: "an integer",
                    });
                }
            } else {
                return Err(ValidationError::TypeMismatch {
                    field: "confidenceScore",
                    expected: "an integer",
                });
            }
        }
        _ => {
            return Err(ValidationError::TypeMismatch {
                field: "confidenceScore",
                expected: "an integer",
            })
        }
    };

    if !(0..=100).contains(&score) {
        return Err(ValidationError::ConfidenceOutOfRange(score));
    }

    Ok(score as u8)
}

fn optional_string(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> ValidationResult<Option<String>> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(ValidationError::TypeMismatch {
            field,
            expected: "a string",
        }),
    }
}

fn optional_string_array(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> ValidationResult<Option<Vec<String>>> {
    match obj.get(field) {
        Some(Value::Array(items)) => {
            let mut urls = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => urls.push(s.clone()),
                    _ => {
                        return Err(ValidationError::TypeMismatch {
                            field,
                            expected: "an array of strings",
                        })
                    }
                }
            }
            Ok(Some(urls))
        }
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(ValidationError::TypeMismatch {
            field,
            expected: "an array of strings",
        }),
    }
}
