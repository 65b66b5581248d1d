//! Canonical claim record

use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// The canonical record every claim is reduced to before evaluation.
///
/// Missing fields default to the empty string / zero rather than an
/// optional: downstream matching treats an empty string as "no
/// information", and a zero cost simply produces a deductible-only split.
/// The cost is never negative once the record is normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimRecord {
    pub patient: String,
    pub diagnosis: String,
    pub treatment: String,
    pub cost: Money,
}

impl ClaimRecord {
    /// Creates a normalized record.
    pub fn new(
        patient: impl Into<String>,
        diagnosis: impl Into<String>,
        treatment: impl Into<String>,
        cost: Money,
    ) -> Self {
        Self {
            patient: patient.into(),
            diagnosis: diagnosis.into(),
            treatment: treatment.into(),
            cost,
        }
        .normalized()
    }

    /// Trims whitespace from the text fields and clamps a negative cost to
    /// zero.
    pub fn normalized(mut self) -> Self {
        self.patient = self.patient.trim().to_string();
        self.diagnosis = self.diagnosis.trim().to_string();
        self.treatment = self.treatment.trim().to_string();
        self.cost = self.cost.max(Money::ZERO);
        self
    }

    /// Returns true if no field carries any information.
    pub fn is_empty(&self) -> bool {
        self.patient.is_empty()
            && self.diagnosis.is_empty()
            && self.treatment.is_empty()
            && self.cost.is_zero()
    }
}
