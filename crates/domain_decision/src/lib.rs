//! Decision Domain
//!
//! Turns a compliance report into the final claim verdict. A weighted
//! composite of four categorical sub-scores meets two hard overrides (a
//! provisional denial and a manual-review flag), producing a decision,
//! a confidence, a rationale, and recommendations.
//!
//! The engine never fails on a structurally valid claim: unknown
//! categories score through defined defaults and the result degrades to
//! the most conservative applicable branch.

pub mod decision;
pub mod engine;
pub mod score;

pub use decision::{DecisionType, FinalDecision, FinancialImpact};
pub use engine::DecisionEngine;
pub use score::DecisionWeights;
