//! The audit pipeline
//!
//! Orchestrates the complete workflow for one claim: raw text in,
//! final decision out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use core_kernel::CaseId;
use domain_compliance::{ComplianceEvaluator, ComplianceReport};
use domain_decision::{DecisionEngine, FinalDecision};
use domain_intake::{ClaimExtractor, ClaimRecord};
use domain_rules::RuleTable;

/// The complete result of auditing one claim.
///
/// The `case_id` is a processing reference for downstream reporting; the
/// nested `final_decision` itself stays reproducible bit-for-bit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditOutcome {
    pub case_id: CaseId,
    #[serde(rename = "claim_info")]
    pub claim: ClaimRecord,
    #[serde(rename = "policy_compliance")]
    pub compliance: ComplianceReport,
    #[serde(rename = "final_decision")]
    pub decision: FinalDecision,
}

/// Extraction, compliance evaluation, and decision in one place.
pub struct AuditPipeline {
    extractor: ClaimExtractor,
    evaluator: ComplianceEvaluator,
    engine: DecisionEngine,
}

impl AuditPipeline {
    /// Builds a pipeline over a rule-table snapshot with default weights.
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self::with_engine(rules, DecisionEngine::default())
    }

    /// Builds a pipeline with a custom decision engine.
    pub fn with_engine(rules: Arc<RuleTable>, engine: DecisionEngine) -> Self {
        Self {
            extractor: ClaimExtractor::new(),
            evaluator: ComplianceEvaluator::new(rules),
            engine,
        }
    }

    /// Audits a raw claim submission.
    pub fn process_text(&self, text: &str) -> AuditOutcome {
        let claim = self.extractor.extract(text);
        self.process_claim(claim)
    }

    /// Audits an already-extracted claim record.
    pub fn process_claim(&self, claim: ClaimRecord) -> AuditOutcome {
        let case_id = CaseId::new();
        let compliance = self.evaluator.evaluate(&claim);
        let decision = self.engine.decide(&claim, &compliance);

        tracing::info!(
            case = %case_id,
            patient = %claim.patient,
            decision = %decision.decision,
            confidence = %decision.confidence,
            "claim audited"
        );

        AuditOutcome {
            case_id,
            claim,
            compliance,
            decision,
        }
    }
}
