//! The decision engine

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{CoreError, Money};
use domain_compliance::{
    ComplianceReport, CoverageStatus, ProvisionalOutcome, RiskLevel,
};
use domain_intake::ClaimRecord;

use crate::decision::{DecisionType, FinalDecision, FinancialImpact};
use crate::score::{self, DecisionWeights};

/// Composite at or above this approves outright.
const APPROVE_THRESHOLD: Decimal = dec!(0.80);
/// Composite at or above this (but below approval) goes to review.
const REVIEW_THRESHOLD: Decimal = dec!(0.50);

/// Turns compliance reports into final decisions.
pub struct DecisionEngine {
    weights: DecisionWeights,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self {
            weights: DecisionWeights::default(),
        }
    }
}

impl DecisionEngine {
    /// Creates an engine with custom, validated weights.
    pub fn new(weights: DecisionWeights) -> Result<Self, CoreError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &DecisionWeights {
        &self.weights
    }

    /// Produces the final decision for one claim.
    pub fn decide(&self, claim: &ClaimRecord, report: &ComplianceReport) -> FinalDecision {
        let composite = self.composite_score(report);
        let decision = resolve_decision(report, composite);
        let confidence = confidence(report, composite);

        tracing::debug!(?decision, %composite, "decision resolved");

        FinalDecision {
            decision,
            decision_score: composite,
            confidence,
            reason: build_reason(report, composite),
            recommendations: recommendations(decision, report),
            financial_impact: financial_impact(decision, claim, report),
        }
    }

    fn composite_score(&self, report: &ComplianceReport) -> Decimal {
        let weighted = self.weights.coverage * score::coverage_score(report.coverage_status.status)
            + self.weights.risk * score::risk_score(report.risk_level.level)
            + self.weights.cost * score::cost_score(&report.cost_compliance)
            + self.weights.requirements
                * score::requirements_score(&report.special_requirements);
        clamp_unit(weighted)
    }
}

/// Resolves the decision type.
///
/// The two overrides run before the thresholds: a provisional denial is
/// terminal no matter the composite, and a manual-review flag can demote
/// an otherwise approvable claim but never approve anything.
fn resolve_decision(report: &ComplianceReport, composite: Decimal) -> DecisionType {
    if report.provisional_decision.decision == ProvisionalOutcome::Denied {
        return DecisionType::Denied;
    }
    if report.risk_level.requires_manual_review {
        return DecisionType::RequiresReview;
    }
    if composite >= APPROVE_THRESHOLD {
        DecisionType::Approved
    } else if composite >= REVIEW_THRESHOLD {
        DecisionType::RequiresReview
    } else {
        DecisionType::Denied
    }
}

/// Confidence is the composite boosted by decisive evidence: a definitive
/// coverage verdict (covered or excluded) and a definitive risk signal
/// (low or high) each tighten the answer.
fn confidence(report: &ComplianceReport, composite: Decimal) -> Decimal {
    let mut value = composite;
    if matches!(
        report.coverage_status.status,
        CoverageStatus::Covered | CoverageStatus::Excluded
    ) {
        value += dec!(0.10);
    }
    if matches!(report.risk_level.level, RiskLevel::Low | RiskLevel::High) {
        value += dec!(0.05);
    }
    clamp_unit(value)
}

/// Assembles the rationale: coverage explanation, top-2 risk factors,
/// first cost warning, then the composite score, joined by "; ".
fn build_reason(report: &ComplianceReport, composite: Decimal) -> String {
    let mut parts = Vec::new();

    if !report.coverage_status.reason.is_empty() {
        parts.push(report.coverage_status.reason.clone());
    }
    for factor in report.risk_level.factors.iter().take(2) {
        parts.push(format!("risk factor: {factor}"));
    }
    if let Some(warning) = report.cost_compliance.warnings.first() {
        parts.push(warning.clone());
    }
    parts.push(format!("composite score {:.2}", composite));

    parts.join("; ")
}

/// Decision-specific guidance plus conditional add-ons, in fixed order.
fn recommendations(decision: DecisionType, report: &ComplianceReport) -> Vec<String> {
    let mut items = vec![match decision {
        DecisionType::Approved => "Proceed with payment processing".to_string(),
        DecisionType::RequiresReview => {
            "Route to a claims examiner for manual review".to_string()
        }
        DecisionType::Denied => "Issue a denial notice with appeal rights".to_string(),
    }];

    if report.special_requirements.prior_authorization {
        items.push("Verify prior authorization documentation before payment".to_string());
    }
    if report.special_requirements.physician_certification {
        items.push("Request the physician certification records".to_string());
    }
    if report.risk_level.level == RiskLevel::High {
        items.push("Escalate to the utilization review committee".to_string());
    }

    items
}

fn financial_impact(
    decision: DecisionType,
    claim: &ClaimRecord,
    report: &ComplianceReport,
) -> FinancialImpact {
    let approved_amount = if decision == DecisionType::Approved {
        claim.cost
    } else {
        Money::ZERO
    };

    FinancialImpact {
        total_claim_amount: claim.cost,
        approved_amount,
        patient_responsibility: report.cost_compliance.patient_responsibility,
        insurance_payment: report.cost_compliance.insurance_payment,
    }
}

fn clamp_unit(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE)
}
