//! Claim-text extraction
//!
//! Submissions arrive either as structured JSON or as free text
//! ("Patient: John Smith, Diagnosis: Cataract, ..."). Extraction tries the
//! JSON shape first, then an anchored pattern family, then a looser one,
//! and finally falls back to a placeholder record. It never errors: a
//! field that cannot be read becomes the empty string or a zero cost.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

use core_kernel::Money;

use crate::claim::ClaimRecord;

/// One regex per claim field.
struct FieldPatterns {
    patient: Regex,
    diagnosis: Regex,
    treatment: Regex,
    cost: Regex,
}

impl FieldPatterns {
    fn apply(&self, text: &str) -> ClaimRecord {
        ClaimRecord::new(
            capture_text(&self.patient, text),
            capture_text(&self.diagnosis, text),
            capture_text(&self.treatment, text),
            capture_cost(&self.cost, text),
        )
    }
}

/// Labeled "Field: value" submissions.
static STANDARD: Lazy<FieldPatterns> = Lazy::new(|| FieldPatterns {
    patient: compile(r"(?i)(?:Patient|Name):\s*([A-Za-z\s]+)"),
    diagnosis: compile(r"(?i)(?:Diagnosis|Condition):\s*([^,\n]+)"),
    treatment: compile(r"(?i)(?:Treatment|Procedure):\s*([^,\n]+)"),
    cost: compile(r"(?i)(?:Cost|Amount|Price):\s*\$?([0-9,]+\.?\d*)"),
});

/// Looser phrasing without the colon convention.
static FLEXIBLE: Lazy<FieldPatterns> = Lazy::new(|| FieldPatterns {
    patient: compile(r"(?i)(?:patient|name|client)[\s:]*([A-Za-z\s]+?)(?:\s*,|\s*\n|$)"),
    diagnosis: compile(r"(?i)(?:diagnosis|condition|disease)[\s:]*([^,\n]+?)(?:\s*,|\s*\n|$)"),
    treatment: compile(r"(?i)(?:treatment|procedure|therapy|surgery)[\s:]*([^,\n]+?)(?:\s*,|\s*\n|$)"),
    cost: compile(r"(?i)(?:cost|amount|price|fee)[\s:]*\$?([0-9,]+\.?\d*)"),
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("field pattern compiles")
}

/// Extracts canonical claim records from raw submissions.
#[derive(Debug, Default)]
pub struct ClaimExtractor;

impl ClaimExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts a claim record from raw text.
    ///
    /// Always returns a record; unreadable submissions yield the fallback
    /// placeholder so the pipeline can still route them to review.
    pub fn extract(&self, text: &str) -> ClaimRecord {
        if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(text) {
            return from_json(&fields);
        }

        let record = from_text(text);
        if record.is_empty() {
            tracing::warn!("no claim fields recognized, using fallback record");
            return fallback_record();
        }
        record
    }
}

fn from_json(fields: &Map<String, Value>) -> ClaimRecord {
    let text_field = |keys: &[&str]| -> String {
        keys.iter()
            .find_map(|key| fields.get(*key))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let cost = ["cost", "amount"]
        .iter()
        .find_map(|key| fields.get(*key))
        .map(coerce_cost)
        .unwrap_or(Money::ZERO);

    ClaimRecord::new(
        text_field(&["patient", "name"]),
        text_field(&["diagnosis", "condition"]),
        text_field(&["treatment", "procedure"]),
        cost,
    )
}

fn from_text(text: &str) -> ClaimRecord {
    let record = STANDARD.apply(text);
    if record.is_empty() {
        FLEXIBLE.apply(text)
    } else {
        record
    }
}

fn fallback_record() -> ClaimRecord {
    ClaimRecord::new("Unknown Patient", "Unknown", "Unknown", Money::ZERO)
}

fn capture_text(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn capture_cost(pattern: &Regex, text: &str) -> Money {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| parse_cost(m.as_str()))
        .unwrap_or(Money::ZERO)
}

/// Coerces a JSON value into a cost. Numbers are taken at face value,
/// numeric strings are parsed, anything else becomes zero.
fn coerce_cost(value: &Value) -> Money {
    match value {
        Value::Number(number) => Decimal::from_str(&number.to_string())
            .map(Money::new)
            .unwrap_or(Money::ZERO),
        Value::String(text) => parse_cost(text),
        _ => Money::ZERO,
    }
}

fn parse_cost(text: &str) -> Money {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    Decimal::from_str(&cleaned)
        .map(Money::new)
        .unwrap_or(Money::ZERO)
}
