//! Canonical fixtures
//!
//! The demo rule table and claims mirror the repository's `demos/` data so
//! unit suites and the CLI demo exercise the same scenarios.

use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_intake::ClaimRecord;
use domain_rules::RuleTable;

const DEMO_RULES_JSON: &str = include_str!("../../../demos/rules/medicare_audit_rules.json");

/// The demo rule table: NCD/LCD-style determinations with Part B limits.
pub fn demo_rule_table() -> RuleTable {
    RuleTable::from_json_str(DEMO_RULES_JSON).expect("demo rule table is valid")
}

/// The six canonical demo claims.
pub fn demo_claims() -> Vec<ClaimRecord> {
    vec![
        cataract_claim(),
        pacemaker_claim(),
        physical_therapy_claim(),
        cosmetic_claim(),
        dialysis_claim(),
        icu_claim(),
    ]
}

/// Covered, low-risk, under the auto-approve limit.
pub fn cataract_claim() -> ClaimRecord {
    ClaimRecord::new(
        "John Smith",
        "Cataract",
        "Phaco-emulsification procedure",
        Money::new(dec!(3500)),
    )
}

/// Covered but expensive enough to force review.
pub fn pacemaker_claim() -> ClaimRecord {
    ClaimRecord::new(
        "Mary Johnson",
        "Cardiac arrhythmia",
        "Pacemaker implantation",
        Money::new(dec!(45000)),
    )
}

/// Conditionally covered.
pub fn physical_therapy_claim() -> ClaimRecord {
    ClaimRecord::new(
        "Robert Chen",
        "Lower back pain",
        "Physical therapy",
        Money::new(dec!(2800)),
    )
}

/// Explicitly excluded.
pub fn cosmetic_claim() -> ClaimRecord {
    ClaimRecord::new(
        "Lisa Wang",
        "Aesthetic concerns",
        "Cosmetic plastic surgery",
        Money::new(dec!(15000)),
    )
}

/// Covered, elevated cost.
pub fn dialysis_claim() -> ClaimRecord {
    ClaimRecord::new(
        "David Wilson",
        "End-stage renal disease",
        "Hemodialysis",
        Money::new(dec!(12000)),
    )
}

/// No determination on file, high cost, high risk.
pub fn icu_claim() -> ClaimRecord {
    ClaimRecord::new(
        "ICU_Patient_001",
        "Severe sepsis with organ failure",
        "Mechanical ventilation and intensive monitoring",
        Money::new(dec!(89500.50)),
    )
}
