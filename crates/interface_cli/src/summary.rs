//! Batch summary reporting

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;
use domain_decision::DecisionType;

use crate::pipeline::AuditOutcome;

/// Aggregate statistics over a batch of audited claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_claims: usize,
    pub auto_approved_count: usize,
    pub manual_review_count: usize,
    pub denied_count: usize,
    /// Percentage of claims auto-approved
    #[serde(with = "rust_decimal::serde::float")]
    pub auto_approval_rate: Decimal,
    pub total_amount: Money,
    pub auto_approved_amount: Money,
    pub manual_review_amount: Money,
    pub denied_amount: Money,
    pub generated_at: DateTime<Utc>,
}

/// Summarizes a batch of audit outcomes.
pub fn summarize(outcomes: &[AuditOutcome]) -> BatchSummary {
    let mut summary = BatchSummary {
        total_claims: outcomes.len(),
        auto_approved_count: 0,
        manual_review_count: 0,
        denied_count: 0,
        auto_approval_rate: Decimal::ZERO,
        total_amount: Money::ZERO,
        auto_approved_amount: Money::ZERO,
        manual_review_amount: Money::ZERO,
        denied_amount: Money::ZERO,
        generated_at: Utc::now(),
    };

    for outcome in outcomes {
        let amount = outcome.claim.cost;
        summary.total_amount = summary.total_amount + amount;
        match outcome.decision.decision {
            DecisionType::Approved => {
                summary.auto_approved_count += 1;
                summary.auto_approved_amount = summary.auto_approved_amount + amount;
            }
            DecisionType::RequiresReview => {
                summary.manual_review_count += 1;
                summary.manual_review_amount = summary.manual_review_amount + amount;
            }
            DecisionType::Denied => {
                summary.denied_count += 1;
                summary.denied_amount = summary.denied_amount + amount;
            }
        }
    }

    if summary.total_claims > 0 {
        summary.auto_approval_rate = (Decimal::from(summary.auto_approved_count as u64)
            / Decimal::from(summary.total_claims as u64)
            * dec!(100))
        .round_dp(1);
    }

    summary
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Claims Audit Summary")?;
        writeln!(f, "--------------------")?;
        writeln!(f, "Total claims:        {}", self.total_claims)?;
        writeln!(
            f,
            "Auto-approved:       {} ({}%)",
            self.auto_approved_count, self.auto_approval_rate
        )?;
        writeln!(f, "Requires review:     {}", self.manual_review_count)?;
        writeln!(f, "Denied:              {}", self.denied_count)?;
        writeln!(f, "Total amount:        {}", self.total_amount)?;
        writeln!(f, "Auto-approved:       {}", self.auto_approved_amount)?;
        writeln!(f, "Pending review:      {}", self.manual_review_amount)?;
        write!(f, "Denied amount:       {}", self.denied_amount)
    }
}

/// Renders one audit outcome as a compact text block.
pub fn render_outcome(outcome: &AuditOutcome) -> String {
    format!(
        "Case: {case}\n  Patient: {patient}\n  Decision: {decision}\n  Reason: {reason}\n  Confidence: {confidence:.2}\n  Coverage Status: {status}\n  Risk Level: {risk}",
        case = outcome.case_id,
        patient = outcome.claim.patient,
        decision = outcome.decision.decision,
        reason = outcome.decision.reason,
        confidence = outcome.decision.confidence,
        status = outcome.compliance.coverage_status.status,
        risk = outcome.compliance.risk_level.level,
    )
}
