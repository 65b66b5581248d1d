//! Benefit-category classification

use domain_rules::{contains_any, BenefitCategoryRule};

/// Category assigned when no keyword list matches the treatment.
pub const DEFAULT_BENEFIT_CATEGORY: &str = "Physicians' Services";

/// Classifies a treatment into a benefit category.
///
/// Categories are scanned in configured order and the first keyword hit
/// wins, so broader categories belong later in the list.
pub fn classify_benefit(treatment: &str, categories: &[BenefitCategoryRule]) -> String {
    categories
        .iter()
        .find(|category| contains_any(treatment, &category.keywords))
        .map(|category| category.name.clone())
        .unwrap_or_else(|| DEFAULT_BENEFIT_CATEGORY.to_string())
}
