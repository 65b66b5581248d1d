//! Coverage-status matching

use serde::{Deserialize, Serialize};

use domain_rules::{CoverageCategory, CoverageRule, RuleRef, RuleTable};

/// Categorical coverage verdict for a claim.
///
/// `Unknown` is never produced by classification; it exists so reports
/// deserialized from foreign or partial payloads degrade to a defined
/// sub-score instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageStatus {
    Covered,
    Conditional,
    Excluded,
    RequiresReview,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CoverageStatus::Covered => "COVERED",
            CoverageStatus::Conditional => "CONDITIONAL",
            CoverageStatus::Excluded => "EXCLUDED",
            CoverageStatus::RequiresReview => "REQUIRES_REVIEW",
            CoverageStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

/// The winning coverage determination for a claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageFinding {
    pub status: CoverageStatus,
    pub source: String,
    pub title: String,
    pub reason: String,
}

impl CoverageFinding {
    fn from_rule(category: CoverageCategory, rule: &CoverageRule) -> Self {
        let (status, reason) = match category {
            CoverageCategory::Covered => (
                CoverageStatus::Covered,
                format!("Meets coverage determination: {}", rule.title),
            ),
            CoverageCategory::Conditional => (
                CoverageStatus::Conditional,
                format!(
                    "Conditional coverage, must meet specific requirements: {}",
                    rule.title
                ),
            ),
            CoverageCategory::Excluded => (
                CoverageStatus::Excluded,
                format!("Explicitly excluded service: {}", rule.title),
            ),
        };
        Self {
            status,
            source: rule.source.clone(),
            title: rule.title.clone(),
            reason,
        }
    }

    fn review_default() -> Self {
        Self {
            status: CoverageStatus::RequiresReview,
            source: "Policy_Default".to_string(),
            title: "Manual Review Required".to_string(),
            reason: "No explicit coverage determination found, requires manual review"
                .to_string(),
        }
    }
}

/// Classifies a claim against the rule table.
///
/// Rules are scanned in fixed priority order (covered, conditional,
/// excluded) and the first match wins; the order decides which
/// determination prevails when several could apply and must not change.
/// No match across all three categories defaults to manual review.
pub fn classify(diagnosis: &str, treatment: &str, rules: &RuleTable) -> CoverageFinding {
    rules
        .in_priority_order()
        .find(|(_, rule)| rule.matches(diagnosis, treatment))
        .map(|(category, rule)| {
            tracing::debug!(source = %rule.source, ?category, "coverage rule matched");
            CoverageFinding::from_rule(category, rule)
        })
        .unwrap_or_else(CoverageFinding::review_default)
}

/// Collects every determination that applies to the claim, in discovery
/// order, capped at three for report brevity.
pub fn applicable_rules(diagnosis: &str, treatment: &str, rules: &RuleTable) -> Vec<RuleRef> {
    rules
        .in_priority_order()
        .filter(|(_, rule)| rule.matches(diagnosis, treatment))
        .take(3)
        .map(|(category, rule)| RuleRef::new(category, rule))
        .collect()
}
