//! Special-requirement detection

use serde::{Deserialize, Serialize};

use domain_intake::ClaimRecord;
use domain_rules::RequirementRules;

/// How many documentation entries are surfaced on every claim.
const DOCUMENTATION_ITEM_CAP: usize = 2;

/// Special-requirement obligations detected for a claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialRequirements {
    pub required_items: Vec<String>,
    pub prior_authorization: bool,
    pub physician_certification: bool,
    pub additional_documentation: bool,
    pub compliant: bool,
}

/// Detects requirement obligations triggered by the treatment text.
///
/// Each configured phrase is split into words; a single word appearing in
/// the treatment (case-insensitive substring) triggers the whole phrase.
/// The first two documentation entries are appended unconditionally.
///
/// `compliant` is always true: the intake record carries no documentation
/// inventory to check against, so the claim is assumed to include what it
/// needs. Known gap, preserved deliberately.
pub fn check(claim: &ClaimRecord, rules: &RequirementRules) -> SpecialRequirements {
    let treatment = claim.treatment.to_lowercase();

    let mut required_items = Vec::new();
    let mut prior_authorization = false;
    let mut physician_certification = false;

    for phrase in &rules.prior_authorization {
        if phrase_word_hits(&treatment, phrase) {
            required_items.push(format!("Prior authorization required: {phrase}"));
            prior_authorization = true;
        }
    }

    for phrase in &rules.physician_certification {
        if phrase_word_hits(&treatment, phrase) {
            required_items.push(format!("Physician certification required: {phrase}"));
            physician_certification = true;
        }
    }

    let mut additional_documentation = false;
    for item in rules.documentation_required.iter().take(DOCUMENTATION_ITEM_CAP) {
        required_items.push(format!("Documentation required: {item}"));
        additional_documentation = true;
    }

    SpecialRequirements {
        required_items,
        prior_authorization,
        physician_certification,
        additional_documentation,
        compliant: true,
    }
}

/// Returns true if any single word of `phrase` appears in the treatment.
fn phrase_word_hits(treatment_lower: &str, phrase: &str) -> bool {
    phrase
        .to_lowercase()
        .split_whitespace()
        .any(|word| treatment_lower.contains(word))
}
