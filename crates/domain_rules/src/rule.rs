//! Coverage determination rules

use serde::{Deserialize, Serialize};

use crate::text::contains_any;

/// Category of a coverage determination.
///
/// The order of the variants is the scan priority: a covered determination
/// beats a conditional one, which beats an exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageCategory {
    Covered,
    Conditional,
    Excluded,
}

/// An NCD/LCD-style coverage determination entry.
///
/// `conditions` are diagnosis triggers and `procedures` are treatment
/// triggers, both matched as case-insensitive substrings. An empty list is
/// a wildcard on that axis: the rule matches any diagnosis (respectively
/// any treatment). This is deliberate - determinations frequently constrain
/// only one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRule {
    /// Determination identifier, e.g. "NCD_20.8"
    pub source: String,
    /// Human-readable determination title
    pub title: String,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub procedures: Vec<String>,
}

impl CoverageRule {
    /// Returns true if this rule applies to the diagnosis/treatment pair.
    ///
    /// The two axes combine as a disjunction: a rule fires when either the
    /// diagnosis or the treatment matches, including via the wildcard
    /// default for an empty list. Tightening this to a conjunction would
    /// flip determinations for single-axis rules.
    pub fn matches(&self, diagnosis: &str, treatment: &str) -> bool {
        let diagnosis_match = self.conditions.is_empty() || contains_any(diagnosis, &self.conditions);
        let procedure_match = self.procedures.is_empty() || contains_any(treatment, &self.procedures);
        diagnosis_match || procedure_match
    }
}

/// A lightweight reference to a matched rule, for report listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRef {
    pub source: String,
    pub title: String,
    pub category: CoverageCategory,
}

impl RuleRef {
    pub fn new(category: CoverageCategory, rule: &CoverageRule) -> Self {
        Self {
            source: rule.source.clone(),
            title: rule.title.clone(),
            category,
        }
    }
}
