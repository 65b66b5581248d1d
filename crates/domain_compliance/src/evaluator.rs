//! The compliance evaluator

use std::sync::Arc;

use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_intake::ClaimRecord;
use domain_rules::RuleTable;

use crate::benefit;
use crate::cost;
use crate::coverage::{self, CoverageFinding, CoverageStatus};
use crate::report::{ComplianceReport, ProvisionalDecision, ProvisionalOutcome};
use crate::requirements::{self, SpecialRequirements};
use crate::risk::{self, RiskAssessment, RiskLevel};

/// Covered low-risk claims under this amount are auto-approved.
const AUTO_APPROVE_LIMIT: Money = Money::new(dec!(5000));
/// Claims above this amount always go to manual review.
const MANUAL_REVIEW_LIMIT: Money = Money::new(dec!(25000));

/// Evaluates claims against an injected, immutable rule table.
///
/// The evaluator holds a snapshot of the table for its lifetime; swapping
/// rules means constructing a new evaluator from the new snapshot.
pub struct ComplianceEvaluator {
    rules: Arc<RuleTable>,
}

impl ComplianceEvaluator {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Produces the full compliance report for one claim.
    pub fn evaluate(&self, claim: &ClaimRecord) -> ComplianceReport {
        let coverage_status =
            coverage::classify(&claim.diagnosis, &claim.treatment, &self.rules);
        let cost_compliance = cost::evaluate(claim.cost, &self.rules.limits);
        let special_requirements = requirements::check(claim, &self.rules.requirements);
        let risk_level = risk::assess(claim, &self.rules.risk_keywords);

        let provisional_decision = provisional(
            &coverage_status,
            &special_requirements,
            &risk_level,
            claim.cost,
        );

        let applicable_rules =
            coverage::applicable_rules(&claim.diagnosis, &claim.treatment, &self.rules);
        let benefit_category =
            benefit::classify_benefit(&claim.treatment, &self.rules.benefit_categories);

        tracing::debug!(
            coverage = ?coverage_status.status,
            risk = ?risk_level.level,
            provisional = ?provisional_decision.decision,
            "claim evaluated"
        );

        ComplianceReport {
            coverage_status,
            cost_compliance,
            special_requirements,
            risk_level,
            provisional_decision,
            applicable_rules,
            benefit_category,
        }
    }
}

/// The provisional decision state machine.
///
/// Arms are ordered by policy precedence and the first match wins:
/// exclusion beats everything, and the high-risk/high-cost arm overrides
/// the default approval that would otherwise catch unremarkable claims.
fn provisional(
    coverage: &CoverageFinding,
    special_requirements: &SpecialRequirements,
    risk: &RiskAssessment,
    cost: Money,
) -> ProvisionalDecision {
    if coverage.status == CoverageStatus::Excluded {
        let reason = if coverage.reason.is_empty() {
            "Service excluded from coverage".to_string()
        } else {
            coverage.reason.clone()
        };
        return ProvisionalDecision::new(ProvisionalOutcome::Denied, reason, dec!(0.95));
    }

    if coverage.status == CoverageStatus::Covered
        && risk.level == RiskLevel::Low
        && cost < AUTO_APPROVE_LIMIT
    {
        return ProvisionalDecision::new(
            ProvisionalOutcome::Approved,
            "Meets coverage standards with low risk",
            dec!(0.90),
        );
    }

    if coverage.status == CoverageStatus::Conditional {
        return if special_requirements.compliant {
            ProvisionalDecision::new(
                ProvisionalOutcome::Approved,
                "Meets conditional coverage requirements",
                dec!(0.80),
            )
        } else {
            ProvisionalDecision::new(
                ProvisionalOutcome::Pending,
                "Additional requirements must be met",
                dec!(0.60),
            )
        };
    }

    if risk.level == RiskLevel::High || cost > MANUAL_REVIEW_LIMIT {
        return ProvisionalDecision::new(
            ProvisionalOutcome::RequiresReview,
            "High-risk or high-cost claim requires manual review",
            dec!(0.50),
        );
    }

    ProvisionalDecision::new(
        ProvisionalOutcome::Approved,
        "Meets basic coverage conditions",
        dec!(0.75),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_rules::CoverageRule;

    fn table() -> RuleTable {
        RuleTable {
            covered: vec![CoverageRule {
                source: "NCD_80.10".to_string(),
                title: "Cataract Extraction".to_string(),
                conditions: vec!["cataract".to_string()],
                procedures: vec!["phaco-emulsification".to_string()],
            }],
            conditional: vec![CoverageRule {
                source: "LCD_L34049".to_string(),
                title: "Outpatient Physical Therapy".to_string(),
                conditions: vec!["back pain".to_string()],
                procedures: vec!["physical therapy".to_string()],
            }],
            excluded: vec![CoverageRule {
                source: "NCD_140.2".to_string(),
                title: "Cosmetic Surgery".to_string(),
                conditions: vec!["aesthetic".to_string()],
                procedures: vec!["cosmetic".to_string()],
            }],
            ..RuleTable::fallback()
        }
    }

    fn evaluator() -> ComplianceEvaluator {
        ComplianceEvaluator::new(Arc::new(table()))
    }

    #[test]
    fn test_excluded_claim_is_denied_with_high_confidence() {
        let claim = ClaimRecord::new(
            "Lisa Wang",
            "Aesthetic concerns",
            "Cosmetic plastic surgery",
            Money::new(dec!(15000)),
        );
        let report = evaluator().evaluate(&claim);

        assert_eq!(report.coverage_status.status, CoverageStatus::Excluded);
        assert_eq!(
            report.provisional_decision.decision,
            ProvisionalOutcome::Denied
        );
        assert_eq!(report.provisional_decision.confidence, dec!(0.95));
    }

    #[test]
    fn test_covered_low_risk_cheap_claim_auto_approves() {
        let claim = ClaimRecord::new(
            "John Smith",
            "Cataract",
            "Phaco-emulsification procedure",
            Money::new(dec!(3500)),
        );
        let report = evaluator().evaluate(&claim);

        assert_eq!(report.coverage_status.status, CoverageStatus::Covered);
        assert_eq!(
            report.provisional_decision.decision,
            ProvisionalOutcome::Approved
        );
        assert_eq!(report.provisional_decision.confidence, dec!(0.90));
    }

    #[test]
    fn test_conditional_claim_approves_when_requirements_met() {
        let claim = ClaimRecord::new(
            "Robert Chen",
            "Lower back pain",
            "Physical therapy",
            Money::new(dec!(2800)),
        );
        let report = evaluator().evaluate(&claim);

        assert_eq!(report.coverage_status.status, CoverageStatus::Conditional);
        assert_eq!(
            report.provisional_decision.decision,
            ProvisionalOutcome::Approved
        );
        assert_eq!(report.provisional_decision.confidence, dec!(0.80));
    }

    #[test]
    fn test_exclusion_beats_high_risk_arm() {
        // Excluded and expensive: the exclusion arm runs first
        let claim = ClaimRecord::new(
            "X",
            "aesthetic",
            "experimental cosmetic surgery",
            Money::new(dec!(90000)),
        );
        let report = evaluator().evaluate(&claim);

        assert_eq!(
            report.provisional_decision.decision,
            ProvisionalOutcome::Denied
        );
    }

    #[test]
    fn test_high_cost_claim_requires_review() {
        let claim = ClaimRecord::new(
            "Mary Johnson",
            "Cardiac arrhythmia",
            "Pacemaker implantation",
            Money::new(dec!(45000)),
        );
        let report = evaluator().evaluate(&claim);

        // No rule matches pacemakers in this table: review status, and the
        // cost > 25000 arm fixes the provisional outcome
        assert_eq!(
            report.provisional_decision.decision,
            ProvisionalOutcome::RequiresReview
        );
        assert_eq!(report.provisional_decision.confidence, dec!(0.50));
    }

    #[test]
    fn test_unremarkable_claim_default_approves() {
        let claim = ClaimRecord::new("D", "sprained ankle", "ice pack", Money::new(dec!(80)));
        let report = evaluator().evaluate(&claim);

        assert_eq!(report.coverage_status.status, CoverageStatus::RequiresReview);
        assert_eq!(
            report.provisional_decision.decision,
            ProvisionalOutcome::Approved
        );
        assert_eq!(report.provisional_decision.confidence, dec!(0.75));
    }

    #[test]
    fn test_report_lists_applicable_rules() {
        let claim = ClaimRecord::new(
            "John Smith",
            "Cataract",
            "Phaco-emulsification procedure",
            Money::new(dec!(3500)),
        );
        let report = evaluator().evaluate(&claim);

        assert_eq!(report.applicable_rules.len(), 1);
        assert_eq!(report.applicable_rules[0].source, "NCD_80.10");
    }

    #[test]
    fn test_benefit_category_from_treatment() {
        let claim = ClaimRecord::new(
            "Lisa Wang",
            "Aesthetic concerns",
            "Cosmetic plastic surgery",
            Money::new(dec!(15000)),
        );
        let report = evaluator().evaluate(&claim);

        assert_eq!(report.benefit_category, "Inpatient Hospital Services");
    }
}
