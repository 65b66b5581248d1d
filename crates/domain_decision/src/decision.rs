//! The final decision

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// The bounded set of final verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionType {
    Approved,
    Denied,
    RequiresReview,
}

impl std::fmt::Display for DecisionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DecisionType::Approved => "APPROVED",
            DecisionType::Denied => "DENIED",
            DecisionType::RequiresReview => "REQUIRES_REVIEW",
        };
        write!(f, "{name}")
    }
}

/// Monetary consequences of the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialImpact {
    pub total_claim_amount: Money,
    pub approved_amount: Money,
    pub patient_responsibility: Money,
    pub insurance_payment: Money,
}

/// The final verdict for one claim.
///
/// Constructed once per claim and never mutated. Deliberately carries no
/// timestamp or random identifier: the same claim against the same rule
/// table must produce a bit-identical decision every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDecision {
    pub decision: DecisionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub decision_score: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence: Decimal,
    pub reason: String,
    pub recommendations: Vec<String>,
    pub financial_impact: FinancialImpact,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decision_wire_names() {
        assert_eq!(
            serde_json::to_string(&DecisionType::RequiresReview).unwrap(),
            r#""REQUIRES_REVIEW""#
        );
        assert_eq!(
            serde_json::to_string(&DecisionType::Approved).unwrap(),
            r#""APPROVED""#
        );
    }

    #[test]
    fn test_final_decision_serializes_scores_as_numbers() {
        let decision = FinalDecision {
            decision: DecisionType::Approved,
            decision_score: dec!(0.97),
            confidence: dec!(1.0),
            reason: "r".to_string(),
            recommendations: vec![],
            financial_impact: FinancialImpact {
                total_claim_amount: Money::new(dec!(3500)),
                approved_amount: Money::new(dec!(3500)),
                patient_responsibility: Money::new(dec!(1980)),
                insurance_payment: Money::new(dec!(1520)),
            },
        };

        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["decision"], "APPROVED");
        assert_eq!(json["decision_score"], serde_json::json!(0.97));
        assert_eq!(
            json["financial_impact"]["total_claim_amount"],
            serde_json::json!(3500.0)
        );
    }
}
