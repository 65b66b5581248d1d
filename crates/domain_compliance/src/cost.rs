//! Cost-limit evaluation

use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};
use domain_rules::CostLimits;
use rust_decimal_macros::dec;

/// Claims above this amount draw a special-review warning.
const HIGH_COST_REVIEW: Money = Money::new(dec!(50000));
/// Claims above this amount additionally draw a committee-review warning.
const ULTRA_HIGH_COST_REVIEW: Money = Money::new(dec!(100000));

/// The cost split and any cost-driven warnings for a claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostCompliance {
    pub total_cost: Money,
    pub deductible: Money,
    pub patient_responsibility: Money,
    pub insurance_payment: Money,
    pub coinsurance_rate: Rate,
    pub warnings: Vec<String>,
    pub compliant: bool,
}

/// Splits a claim cost into patient and insurer shares at full precision.
///
/// `patient = deductible + max(0, cost - deductible) * coinsurance_rate`,
/// `insurer = cost - patient`. The shares always sum to the cost exactly;
/// rounding is applied only when the values are stored into the report.
pub fn split_cost(cost: Money, limits: &CostLimits) -> (Money, Money) {
    let over_deductible = cost.excess_over(limits.annual_deductible);
    let patient = limits.annual_deductible + limits.coinsurance_rate.apply(over_deductible);
    let insurer = cost - patient;
    (patient, insurer)
}

/// Evaluates a claim cost against the configured limits.
///
/// `compliant` is always true: these policies carry no absolute cost
/// ceiling, so cost can escalate review but never disqualify a claim
/// outright.
pub fn evaluate(cost: Money, limits: &CostLimits) -> CostCompliance {
    let (patient, insurer) = split_cost(cost, limits);

    let mut warnings = Vec::new();
    if cost > HIGH_COST_REVIEW {
        warnings.push("High-cost claim requiring special review".to_string());
    }
    if cost > ULTRA_HIGH_COST_REVIEW {
        warnings.push("Ultra-high-cost claim requiring committee review".to_string());
    }

    CostCompliance {
        total_cost: cost,
        deductible: limits.annual_deductible,
        patient_responsibility: patient.round_cents(),
        insurance_payment: insurer.round_cents(),
        coinsurance_rate: limits.coinsurance_rate,
        warnings,
        compliant: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Rate;

    fn limits() -> CostLimits {
        CostLimits {
            annual_deductible: Money::new(dec!(1600)),
            coinsurance_rate: Rate::new(dec!(0.20)),
        }
    }

    #[test]
    fn test_split_above_deductible() {
        let compliance = evaluate(Money::new(dec!(3500)), &limits());

        // 1600 + (3500 - 1600) * 0.20 = 1980
        assert_eq!(compliance.patient_responsibility, Money::new(dec!(1980.00)));
        assert_eq!(compliance.insurance_payment, Money::new(dec!(1520.00)));
        assert!(compliance.warnings.is_empty());
        assert!(compliance.compliant);
    }

    #[test]
    fn test_split_below_deductible() {
        // Below the deductible the patient share is the full deductible and
        // the insurer share goes negative; that is the configured policy
        // arithmetic, not an error.
        let compliance = evaluate(Money::new(dec!(1000)), &limits());

        assert_eq!(compliance.patient_responsibility, Money::new(dec!(1600.00)));
        assert_eq!(compliance.insurance_payment, Money::new(dec!(-600.00)));
    }

    #[test]
    fn test_zero_cost_claim() {
        let compliance = evaluate(Money::ZERO, &limits());

        assert_eq!(compliance.patient_responsibility, Money::new(dec!(1600.00)));
        assert!(compliance.compliant);
    }

    #[test]
    fn test_high_cost_warning() {
        let compliance = evaluate(Money::new(dec!(60000)), &limits());

        assert_eq!(compliance.warnings.len(), 1);
        assert!(compliance.warnings[0].contains("High-cost"));
    }

    #[test]
    fn test_both_warnings_fire_together() {
        let compliance = evaluate(Money::new(dec!(150000)), &limits());

        assert_eq!(compliance.warnings.len(), 2);
        assert!(compliance.warnings[1].contains("Ultra-high-cost"));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let compliance = evaluate(Money::new(dec!(50000)), &limits());
        assert!(compliance.warnings.is_empty());
    }

    #[test]
    fn test_rounding_only_in_report() {
        let compliance = evaluate(Money::new(dec!(89500.50)), &limits());

        // 1600 + 87900.50 * 0.20 = 19180.10
        assert_eq!(compliance.patient_responsibility, Money::new(dec!(19180.10)));
        assert_eq!(compliance.insurance_payment, Money::new(dec!(70320.40)));
    }
}
