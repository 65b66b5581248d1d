//! Rule-table loading
//!
//! Tables are JSON documents deserialized directly into [`RuleTable`].
//! Every load path validates before returning; a table that cannot pass
//! validation never reaches the pipeline.

use std::path::Path;

use crate::error::RuleTableError;
use crate::table::RuleTable;

impl RuleTable {
    /// Parses and validates a rule table from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, RuleTableError> {
        let table: RuleTable =
            serde_json::from_str(json).map_err(|e| RuleTableError::Parse(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    /// Reads, parses, and validates a rule table from a file path.
    pub fn from_json_file(path: &Path) -> Result<Self, RuleTableError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| RuleTableError::FileNotFound(path.display().to_string()))?;
        let table = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            rules = table.rule_count(),
            "rule table loaded"
        );
        Ok(table)
    }
}
