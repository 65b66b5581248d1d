//! Claim risk scoring

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use domain_intake::ClaimRecord;
use domain_rules::{contains_any, RiskKeywords};

/// Cost above which a claim is a high-risk indicator (+3).
const HIGH_COST_RISK: Money = Money::new(dec!(50000));
/// Cost above which a claim is a medium-risk indicator (+2).
const ELEVATED_COST_RISK: Money = Money::new(dec!(10000));

/// Risk tier for a claim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        write!(f, "{name}")
    }
}

/// The scored risk profile of a claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: i32,
    pub factors: Vec<String>,
    pub requires_manual_review: bool,
}

/// Scores a claim from independent cost and keyword signals.
///
/// All signals can co-fire and accumulate. The score is deliberately not
/// clamped: routine care can pull it negative, and the level buckets are
/// applied to the raw signed value. Keyword tiers come from the rule
/// table; the cost thresholds and factor labels are fixed. Diagnosis is
/// available on the record but no current indicator keys off it.
pub fn assess(claim: &ClaimRecord, keywords: &RiskKeywords) -> RiskAssessment {
    let mut score = 0i32;
    let mut factors = Vec::new();

    if claim.cost > HIGH_COST_RISK {
        score += 3;
        factors.push("High-cost claim".to_string());
    }
    if contains_any(&claim.treatment, &keywords.high) {
        score += 3;
        factors.push("Experimental treatment".to_string());
    }
    if claim.cost > ELEVATED_COST_RISK {
        score += 2;
        factors.push("Elevated cost".to_string());
    }
    if contains_any(&claim.treatment, &keywords.medium) {
        score += 2;
        factors.push("Elective procedure".to_string());
    }
    if contains_any(&claim.treatment, &keywords.low) {
        score -= 1;
        factors.push("Routine care".to_string());
    }

    let level = if score >= 5 {
        RiskLevel::High
    } else if score >= 2 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    RiskAssessment {
        level,
        score,
        factors,
        requires_manual_review: matches!(level, RiskLevel::High | RiskLevel::Medium),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(treatment: &str, cost: i64) -> ClaimRecord {
        ClaimRecord::new("Test", "", treatment, Money::from_dollars(cost))
    }

    #[test]
    fn test_low_risk_for_cheap_plain_claim() {
        let risk = assess(&claim("hemodialysis", 2000), &RiskKeywords::default());

        assert_eq!(risk.level, RiskLevel::Low);
        assert_eq!(risk.score, 0);
        assert!(!risk.requires_manual_review);
    }

    #[test]
    fn test_high_cost_signals_stack() {
        // > 50000 fires both the +3 and the +2 cost signals
        let risk = assess(&claim("mechanical ventilation", 89500), &RiskKeywords::default());

        assert_eq!(risk.score, 5);
        assert_eq!(risk.level, RiskLevel::High);
        assert_eq!(
            risk.factors,
            vec!["High-cost claim".to_string(), "Elevated cost".to_string()]
        );
        assert!(risk.requires_manual_review);
    }

    #[test]
    fn test_experimental_keyword() {
        let risk = assess(
            &claim("experimental gene therapy", 1000),
            &RiskKeywords::default(),
        );

        assert_eq!(risk.score, 3);
        assert_eq!(risk.level, RiskLevel::Medium);
    }

    #[test]
    fn test_elective_keyword() {
        let risk = assess(&claim("elective knee surgery", 500), &RiskKeywords::default());

        assert_eq!(risk.score, 2);
        assert_eq!(risk.level, RiskLevel::Medium);
        assert!(risk.requires_manual_review);
    }

    #[test]
    fn test_routine_care_goes_negative() {
        let risk = assess(&claim("routine preventive screening", 100), &RiskKeywords::default());

        // The raw signed score is kept; no clamping at zero
        assert_eq!(risk.score, -1);
        assert_eq!(risk.level, RiskLevel::Low);
        assert_eq!(risk.factors, vec!["Routine care".to_string()]);
    }

    #[test]
    fn test_opposing_signals_accumulate() {
        // Elective (+2) and routine (-1) both fire: score 1, LOW
        let risk = assess(
            &claim("elective routine screening", 200),
            &RiskKeywords::default(),
        );

        assert_eq!(risk.score, 1);
        assert_eq!(risk.level, RiskLevel::Low);
        assert_eq!(risk.factors.len(), 2);
    }

    #[test]
    fn test_medium_boundary_is_two() {
        let risk = assess(&claim("hospital stay", 15000), &RiskKeywords::default());

        assert_eq!(risk.score, 2);
        assert_eq!(risk.level, RiskLevel::Medium);
    }

    #[test]
    fn test_custom_keyword_tiers() {
        let keywords = RiskKeywords {
            high: vec!["unproven".to_string()],
            medium: vec![],
            low: vec![],
        };
        let risk = assess(&claim("unproven stem-cell infusion", 100), &keywords);

        assert_eq!(risk.score, 3);
        assert_eq!(risk.factors, vec!["Experimental treatment".to_string()]);
    }

    #[test]
    fn test_diagnosis_does_not_drive_score() {
        let record = ClaimRecord::new(
            "Test",
            "experimental elective cancer",
            "hemodialysis",
            Money::from_dollars(100),
        );
        let risk = assess(&record, &RiskKeywords::default());

        assert_eq!(risk.score, 0);
        assert_eq!(risk.level, RiskLevel::Low);
    }
}
