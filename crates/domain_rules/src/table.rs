//! The coverage-rule table

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::error::RuleTableError;
use crate::rule::{CoverageCategory, CoverageRule};

/// Cost-sharing limits applied to every claim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostLimits {
    pub annual_deductible: Money,
    pub coinsurance_rate: Rate,
}

impl Default for CostLimits {
    fn default() -> Self {
        // Part B-style defaults
        Self {
            annual_deductible: Money::new(dec!(1600)),
            coinsurance_rate: Rate::new(dec!(0.20)),
        }
    }
}

/// Special-requirement trigger phrases.
///
/// Prior-authorization and physician-certification entries are phrases; a
/// claim triggers one when any single word of the phrase appears in the
/// treatment text. Documentation entries are unconditional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementRules {
    pub prior_authorization: Vec<String>,
    pub physician_certification: Vec<String>,
    pub documentation_required: Vec<String>,
}

/// Risk-indicator keyword lists, by severity tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskKeywords {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl Default for RiskKeywords {
    fn default() -> Self {
        Self {
            high: vec!["experimental".to_string(), "investigational".to_string()],
            medium: vec!["elective".to_string()],
            low: vec!["routine".to_string(), "preventive".to_string()],
        }
    }
}

/// A benefit category and the treatment keywords that select it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitCategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
}

impl BenefitCategoryRule {
    fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The complete, immutable coverage-rule table.
///
/// Loaded once and injected into the evaluation pipeline; reload is a
/// whole-table swap through [`crate::SharedRuleTable`], never field
/// mutation, so concurrent evaluations always see one consistent table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTable {
    pub covered: Vec<CoverageRule>,
    pub conditional: Vec<CoverageRule>,
    pub excluded: Vec<CoverageRule>,
    pub limits: CostLimits,
    pub requirements: RequirementRules,
    pub risk_keywords: RiskKeywords,
    pub benefit_categories: Vec<BenefitCategoryRule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::fallback()
    }
}

impl RuleTable {
    /// A minimal table for when no rules file is available: no
    /// determinations (every claim defaults to manual review), standard
    /// cost limits, and the built-in keyword tiers.
    pub fn fallback() -> Self {
        Self {
            covered: Vec::new(),
            conditional: Vec::new(),
            excluded: Vec::new(),
            limits: CostLimits::default(),
            requirements: RequirementRules::default(),
            risk_keywords: RiskKeywords::default(),
            benefit_categories: Self::default_benefit_categories(),
        }
    }

    /// The standard benefit-category keyword mapping. Order matters: the
    /// first matching category wins.
    pub fn default_benefit_categories() -> Vec<BenefitCategoryRule> {
        vec![
            BenefitCategoryRule::new("Inpatient Hospital Services", &["surgery", "surgical"]),
            BenefitCategoryRule::new(
                "Outpatient Physical Therapy Services",
                &["therapy", "rehabilitation", "treatment"],
            ),
            BenefitCategoryRule::new("Diagnostic X-Ray Tests", &["imaging", "x-ray", "ct", "mri"]),
            BenefitCategoryRule::new("Drugs and Biologicals", &["drug", "medication", "injection"]),
            BenefitCategoryRule::new("Durable Medical Equipment", &["device", "equipment"]),
        ]
    }

    /// Iterates all rules in match-priority order: covered, then
    /// conditional, then excluded. The first rule this iterator yields
    /// that matches a claim is the winning determination.
    pub fn in_priority_order(&self) -> impl Iterator<Item = (CoverageCategory, &CoverageRule)> {
        let covered = self
            .covered
            .iter()
            .map(|r| (CoverageCategory::Covered, r));
        let conditional = self
            .conditional
            .iter()
            .map(|r| (CoverageCategory::Conditional, r));
        let excluded = self
            .excluded
            .iter()
            .map(|r| (CoverageCategory::Excluded, r));
        covered.chain(conditional).chain(excluded)
    }

    /// Total number of coverage determinations in the table.
    pub fn rule_count(&self) -> usize {
        self.covered.len() + self.conditional.len() + self.excluded.len()
    }

    /// Checks the table for misconfiguration.
    ///
    /// A silently bad table would corrupt every downstream decision, so
    /// loading rejects anything suspect rather than patching it up.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        if self.limits.annual_deductible.is_negative() {
            return Err(RuleTableError::invalid(format!(
                "annual deductible must not be negative, got {}",
                self.limits.annual_deductible
            )));
        }
        if !self.limits.coinsurance_rate.is_fraction() {
            return Err(RuleTableError::invalid(format!(
                "coinsurance rate must lie in [0, 1], got {}",
                self.limits.coinsurance_rate.as_decimal()
            )));
        }

        for (category, rule) in self.in_priority_order() {
            if rule.source.trim().is_empty() {
                return Err(RuleTableError::invalid(format!(
                    "{category:?} rule \"{}\" has a blank source",
                    rule.title
                )));
            }
            if has_blank_entry(&rule.conditions) || has_blank_entry(&rule.procedures) {
                return Err(RuleTableError::invalid(format!(
                    "rule {} has a blank keyword; a wildcard axis must be an empty list",
                    rule.source
                )));
            }
        }

        for list in [
            &self.risk_keywords.high,
            &self.risk_keywords.medium,
            &self.risk_keywords.low,
        ] {
            if has_blank_entry(list) {
                return Err(RuleTableError::invalid(
                    "risk keyword lists must not contain blank entries",
                ));
            }
        }

        for category in &self.benefit_categories {
            if category.name.trim().is_empty() {
                return Err(RuleTableError::invalid(
                    "benefit categories must be named",
                ));
            }
            if category.keywords.is_empty() || has_blank_entry(&category.keywords) {
                return Err(RuleTableError::invalid(format!(
                    "benefit category \"{}\" needs at least one non-blank keyword",
                    category.name
                )));
            }
        }

        Ok(())
    }
}

fn has_blank_entry(entries: &[String]) -> bool {
    entries.iter().any(|e| e.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_table_is_valid() {
        assert!(RuleTable::fallback().validate().is_ok());
        assert_eq!(RuleTable::fallback().rule_count(), 0);
    }

    #[test]
    fn test_priority_order_is_covered_conditional_excluded() {
        let rule = |source: &str| CoverageRule {
            source: source.to_string(),
            title: source.to_string(),
            conditions: vec!["x".to_string()],
            procedures: vec![],
        };

        let table = RuleTable {
            covered: vec![rule("COV")],
            conditional: vec![rule("COND")],
            excluded: vec![rule("EXCL")],
            ..RuleTable::fallback()
        };

        let order: Vec<_> = table
            .in_priority_order()
            .map(|(category, r)| (category, r.source.as_str()))
            .collect();

        assert_eq!(
            order,
            vec![
                (CoverageCategory::Covered, "COV"),
                (CoverageCategory::Conditional, "COND"),
                (CoverageCategory::Excluded, "EXCL"),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_bad_coinsurance_rate() {
        let table = RuleTable {
            limits: CostLimits {
                annual_deductible: Money::new(dec!(1600)),
                coinsurance_rate: Rate::new(dec!(1.5)),
            },
            ..RuleTable::fallback()
        };

        assert!(matches!(table.validate(), Err(RuleTableError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_negative_deductible() {
        let table = RuleTable {
            limits: CostLimits {
                annual_deductible: Money::new(dec!(-1)),
                coinsurance_rate: Rate::new(dec!(0.20)),
            },
            ..RuleTable::fallback()
        };

        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_rule_source() {
        let table = RuleTable {
            covered: vec![CoverageRule {
                source: "  ".to_string(),
                title: "Untitled".to_string(),
                conditions: vec![],
                procedures: vec![],
            }],
            ..RuleTable::fallback()
        };

        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_keyword() {
        let table = RuleTable {
            excluded: vec![CoverageRule {
                source: "NCD_X".to_string(),
                title: "X".to_string(),
                conditions: vec!["".to_string()],
                procedures: vec![],
            }],
            ..RuleTable::fallback()
        };

        assert!(table.validate().is_err());
    }
}
