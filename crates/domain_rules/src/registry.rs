//! Shared rule-table handle
//!
//! Evaluations run against an `Arc<RuleTable>` snapshot. When rules are
//! refreshed, the handle swaps in a complete replacement table; claims
//! already being evaluated keep the snapshot they started with, so a
//! reload can never produce a half-old, half-new decision.

use std::sync::{Arc, RwLock};

use core_kernel::RuleSetId;

use crate::table::RuleTable;

struct Generation {
    id: RuleSetId,
    table: Arc<RuleTable>,
}

/// A swappable handle to the active rule table.
pub struct SharedRuleTable {
    inner: RwLock<Generation>,
}

impl SharedRuleTable {
    /// Wraps an already-validated table as the first generation.
    pub fn new(table: RuleTable) -> Self {
        Self {
            inner: RwLock::new(Generation {
                id: RuleSetId::new(),
                table: Arc::new(table),
            }),
        }
    }

    /// Returns a snapshot of the current table.
    pub fn current(&self) -> Arc<RuleTable> {
        self.inner
            .read()
            .expect("rule table lock poisoned")
            .table
            .clone()
    }

    /// Returns the identifier of the current table generation.
    pub fn version(&self) -> RuleSetId {
        self.inner.read().expect("rule table lock poisoned").id
    }

    /// Replaces the active table with a new generation and returns the new
    /// generation's identifier. Existing snapshots are unaffected.
    pub fn swap(&self, table: RuleTable) -> RuleSetId {
        let id = RuleSetId::new();
        let mut guard = self.inner.write().expect("rule table lock poisoned");
        guard.id = id;
        guard.table = Arc::new(table);
        tracing::info!(rule_set = %id, "rule table swapped");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::CoverageRule;

    #[test]
    fn test_swap_replaces_table_for_new_readers() {
        let shared = SharedRuleTable::new(RuleTable::fallback());
        assert_eq!(shared.current().rule_count(), 0);

        let mut replacement = RuleTable::fallback();
        replacement.covered.push(CoverageRule {
            source: "NCD_20.8".to_string(),
            title: "Cardiac Pacemakers".to_string(),
            conditions: vec!["arrhythmia".to_string()],
            procedures: vec!["pacemaker".to_string()],
        });
        shared.swap(replacement);

        assert_eq!(shared.current().rule_count(), 1);
    }

    #[test]
    fn test_existing_snapshot_survives_swap() {
        let shared = SharedRuleTable::new(RuleTable::fallback());
        let snapshot = shared.current();

        let mut replacement = RuleTable::fallback();
        replacement.excluded.push(CoverageRule {
            source: "NCD_140.2".to_string(),
            title: "Cosmetic Surgery".to_string(),
            conditions: vec!["aesthetic".to_string()],
            procedures: vec!["cosmetic".to_string()],
        });
        shared.swap(replacement);

        // The pre-swap snapshot still sees the old table
        assert_eq!(snapshot.rule_count(), 0);
        assert_eq!(shared.current().rule_count(), 1);
    }

    #[test]
    fn test_swap_advances_version() {
        let shared = SharedRuleTable::new(RuleTable::fallback());
        let before = shared.version();
        let after = shared.swap(RuleTable::fallback());

        assert_ne!(before, after);
        assert_eq!(shared.version(), after);
    }
}
