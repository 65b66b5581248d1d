//! Sub-score lookup tables and composite weights
//!
//! Each categorical report field maps to a sub-score through an exhaustive
//! table rather than cascading conditionals, so every mapping can be read
//! and tested in isolation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::CoreError;
use domain_compliance::{CostCompliance, CoverageStatus, RiskLevel, SpecialRequirements};

/// Sub-score for the coverage status.
pub fn coverage_score(status: CoverageStatus) -> Decimal {
    match status {
        CoverageStatus::Covered => dec!(1.0),
        CoverageStatus::Conditional => dec!(0.7),
        CoverageStatus::RequiresReview => dec!(0.5),
        CoverageStatus::Excluded => dec!(0.0),
        CoverageStatus::Unknown => dec!(0.3),
    }
}

/// Sub-score for the risk level.
pub fn risk_score(level: RiskLevel) -> Decimal {
    match level {
        RiskLevel::Low => dec!(1.0),
        RiskLevel::Medium => dec!(0.6),
        RiskLevel::High => dec!(0.2),
    }
}

/// Sub-score for cost compliance, driven by the warning count.
pub fn cost_score(cost: &CostCompliance) -> Decimal {
    if !cost.compliant {
        return dec!(0.0);
    }
    match cost.warnings.len() {
        0 => dec!(1.0),
        1 => dec!(0.7),
        _ => dec!(0.3),
    }
}

/// Sub-score for special requirements, driven by the obligation count.
pub fn requirements_score(requirements: &SpecialRequirements) -> Decimal {
    if !requirements.compliant {
        return dec!(0.0);
    }
    match requirements.required_items.len() {
        0 => dec!(1.0),
        1..=3 => dec!(0.8),
        _ => dec!(0.5),
    }
}

/// Weights combining the four sub-scores into the composite.
///
/// Weights must be non-negative and sum to exactly one; a misconfigured
/// set would silently skew every decision, so construction rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionWeights {
    #[serde(with = "rust_decimal::serde::float")]
    pub coverage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub risk: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub requirements: Decimal,
}

impl Default for DecisionWeights {
    fn default() -> Self {
        Self {
            coverage: dec!(0.40),
            risk: dec!(0.25),
            cost: dec!(0.20),
            requirements: dec!(0.15),
        }
    }
}

impl DecisionWeights {
    /// Creates a validated weight set.
    pub fn new(
        coverage: Decimal,
        risk: Decimal,
        cost: Decimal,
        requirements: Decimal,
    ) -> Result<Self, CoreError> {
        let weights = Self {
            coverage,
            risk,
            cost,
            requirements,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let all = [self.coverage, self.risk, self.cost, self.requirements];
        if all.iter().any(|w| w.is_sign_negative()) {
            return Err(CoreError::configuration(
                "decision weights must not be negative",
            ));
        }
        let total: Decimal = all.iter().copied().sum();
        if total != Decimal::ONE {
            return Err(CoreError::configuration(format!(
                "decision weights must sum to 1, got {total}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_table() {
        assert_eq!(coverage_score(CoverageStatus::Covered), dec!(1.0));
        assert_eq!(coverage_score(CoverageStatus::Conditional), dec!(0.7));
        assert_eq!(coverage_score(CoverageStatus::RequiresReview), dec!(0.5));
        assert_eq!(coverage_score(CoverageStatus::Excluded), dec!(0.0));
        assert_eq!(coverage_score(CoverageStatus::Unknown), dec!(0.3));
    }

    #[test]
    fn test_risk_table() {
        assert_eq!(risk_score(RiskLevel::Low), dec!(1.0));
        assert_eq!(risk_score(RiskLevel::Medium), dec!(0.6));
        assert_eq!(risk_score(RiskLevel::High), dec!(0.2));
    }

    #[test]
    fn test_cost_score_by_warning_count() {
        let mut cost = CostCompliance {
            compliant: true,
            ..CostCompliance::default()
        };
        assert_eq!(cost_score(&cost), dec!(1.0));

        cost.warnings.push("w1".to_string());
        assert_eq!(cost_score(&cost), dec!(0.7));

        cost.warnings.push("w2".to_string());
        assert_eq!(cost_score(&cost), dec!(0.3));
    }

    #[test]
    fn test_non_compliant_cost_scores_zero() {
        let cost = CostCompliance::default();
        assert!(!cost.compliant);
        assert_eq!(cost_score(&cost), dec!(0.0));
    }

    #[test]
    fn test_requirements_score_by_item_count() {
        let mut requirements = SpecialRequirements {
            compliant: true,
            ..SpecialRequirements::default()
        };
        assert_eq!(requirements_score(&requirements), dec!(1.0));

        requirements.required_items = vec!["a".to_string(); 3];
        assert_eq!(requirements_score(&requirements), dec!(0.8));

        requirements.required_items.push("d".to_string());
        assert_eq!(requirements_score(&requirements), dec!(0.5));
    }

    #[test]
    fn test_default_weights_are_valid() {
        DecisionWeights::default().validate().unwrap();
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let result = DecisionWeights::new(dec!(0.5), dec!(0.5), dec!(0.5), dec!(0.5));
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_weights_must_be_non_negative() {
        let result = DecisionWeights::new(dec!(1.2), dec!(-0.2), dec!(0), dec!(0));
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }
}
