//! The compliance report

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_rules::RuleRef;

use crate::coverage::CoverageFinding;
use crate::cost::CostCompliance;
use crate::requirements::SpecialRequirements;
use crate::risk::RiskAssessment;

/// The compliance stage's own coverage-driven recommendation.
///
/// The decision engine consumes this and may override everything except a
/// denial, which is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProvisionalOutcome {
    Approved,
    Denied,
    Pending,
    #[default]
    RequiresReview,
}

/// Provisional decision with its confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionalDecision {
    pub decision: ProvisionalOutcome,
    pub reason: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub confidence: Decimal,
}

impl ProvisionalDecision {
    pub fn new(decision: ProvisionalOutcome, reason: impl Into<String>, confidence: Decimal) -> Self {
        Self {
            decision,
            reason: reason.into(),
            confidence,
        }
    }
}

/// Everything the compliance stage found out about one claim.
///
/// Immutable once produced. Every field defaults when absent from a
/// serialized payload, so a partial report degrades instead of failing
/// downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceReport {
    pub coverage_status: CoverageFinding,
    pub cost_compliance: CostCompliance,
    pub special_requirements: SpecialRequirements,
    pub risk_level: RiskAssessment,
    pub provisional_decision: ProvisionalDecision,
    pub applicable_rules: Vec<RuleRef>,
    pub benefit_category: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::CoverageStatus;

    #[test]
    fn test_partial_payload_degrades_to_defaults() {
        let report: ComplianceReport = serde_json::from_str(
            r#"{ "coverage_status": { "status": "COVERED" } }"#,
        )
        .unwrap();

        assert_eq!(report.coverage_status.status, CoverageStatus::Covered);
        assert!(report.cost_compliance.total_cost.is_zero());
        assert!(!report.cost_compliance.compliant);
        assert!(report.applicable_rules.is_empty());
        assert_eq!(report.benefit_category, "");
    }

    #[test]
    fn test_provisional_wire_names() {
        let decision = ProvisionalDecision::new(
            ProvisionalOutcome::RequiresReview,
            "manual review",
            Decimal::new(50, 2),
        );
        let json = serde_json::to_value(&decision).unwrap();

        assert_eq!(json["decision"], "REQUIRES_REVIEW");
        assert_eq!(json["confidence"], serde_json::json!(0.5));
    }
}
