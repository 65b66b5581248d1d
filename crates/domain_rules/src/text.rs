//! Keyword matching primitives
//!
//! All rule matching in the system is deliberately plain substring
//! matching. Upgrading to fuzzy or semantic matching would change decision
//! outcomes, so any such enhancement belongs in a separately versioned
//! rule set, not here.

/// Returns true if any keyword appears in `text`, case-insensitively.
///
/// An empty keyword list never matches; wildcard semantics for empty lists
/// are decided by the caller.
pub fn contains_any(text: &str, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return false;
    }
    let text = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| text.contains(&keyword.to_lowercase()))
}
