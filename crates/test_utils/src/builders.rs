//! Test data builders

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Money, Rate};
use domain_intake::ClaimRecord;
use domain_rules::{CostLimits, CoverageRule, RiskKeywords, RuleTable};

/// Builder for claim records with unremarkable defaults.
pub struct ClaimRecordBuilder {
    patient: String,
    diagnosis: String,
    treatment: String,
    cost: Money,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    pub fn new() -> Self {
        Self {
            patient: "Jane Doe".to_string(),
            diagnosis: "Hypertension".to_string(),
            treatment: "Office visit".to_string(),
            cost: Money::new(dec!(150)),
        }
    }

    pub fn with_patient(mut self, patient: impl Into<String>) -> Self {
        self.patient = patient.into();
        self
    }

    pub fn with_diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis = diagnosis.into();
        self
    }

    pub fn with_treatment(mut self, treatment: impl Into<String>) -> Self {
        self.treatment = treatment.into();
        self
    }

    pub fn with_cost(mut self, cost: Decimal) -> Self {
        self.cost = Money::new(cost);
        self
    }

    pub fn build(self) -> ClaimRecord {
        ClaimRecord::new(self.patient, self.diagnosis, self.treatment, self.cost)
    }
}

/// Builder for synthetic rule tables.
pub struct RuleTableBuilder {
    table: RuleTable,
}

impl Default for RuleTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTableBuilder {
    /// Starts from the fallback table: no determinations, standard limits.
    pub fn new() -> Self {
        Self {
            table: RuleTable::fallback(),
        }
    }

    pub fn with_covered(mut self, rule: CoverageRule) -> Self {
        self.table.covered.push(rule);
        self
    }

    pub fn with_conditional(mut self, rule: CoverageRule) -> Self {
        self.table.conditional.push(rule);
        self
    }

    pub fn with_excluded(mut self, rule: CoverageRule) -> Self {
        self.table.excluded.push(rule);
        self
    }

    pub fn with_limits(mut self, annual_deductible: Decimal, coinsurance_rate: Decimal) -> Self {
        self.table.limits = CostLimits {
            annual_deductible: Money::new(annual_deductible),
            coinsurance_rate: Rate::new(coinsurance_rate),
        };
        self
    }

    pub fn with_prior_authorization(mut self, phrase: impl Into<String>) -> Self {
        self.table.requirements.prior_authorization.push(phrase.into());
        self
    }

    pub fn with_physician_certification(mut self, phrase: impl Into<String>) -> Self {
        self.table
            .requirements
            .physician_certification
            .push(phrase.into());
        self
    }

    pub fn with_documentation(mut self, item: impl Into<String>) -> Self {
        self.table.requirements.documentation_required.push(item.into());
        self
    }

    pub fn with_risk_keywords(mut self, keywords: RiskKeywords) -> Self {
        self.table.risk_keywords = keywords;
        self
    }

    pub fn build(self) -> RuleTable {
        self.table
    }
}

/// Shorthand for a coverage rule in tests.
pub fn coverage_rule(source: &str, conditions: &[&str], procedures: &[&str]) -> CoverageRule {
    CoverageRule {
        source: source.to_string(),
        title: format!("Determination {source}"),
        conditions: conditions.iter().map(|s| s.to_string()).collect(),
        procedures: procedures.iter().map(|s| s.to_string()).collect(),
    }
}
