//! Policy Compliance Domain
//!
//! This crate evaluates a canonical claim record against the coverage-rule
//! table and produces one immutable [`ComplianceReport`]:
//!
//! ```text
//! ClaimRecord -> coverage match -> cost split -> requirements -> risk
//!             -> provisional decision -> ComplianceReport
//! ```
//!
//! Every function here is a pure function of its inputs and the injected
//! rule table; nothing blocks, allocates shared state, or fails for a
//! structurally valid record.

pub mod benefit;
pub mod coverage;
pub mod cost;
pub mod evaluator;
pub mod report;
pub mod requirements;
pub mod risk;

pub use coverage::{CoverageFinding, CoverageStatus};
pub use cost::CostCompliance;
pub use evaluator::ComplianceEvaluator;
pub use report::{ComplianceReport, ProvisionalDecision, ProvisionalOutcome};
pub use requirements::SpecialRequirements;
pub use risk::{RiskAssessment, RiskLevel};
