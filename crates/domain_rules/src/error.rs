//! Rule-table errors

use thiserror::Error;

/// Errors raised while loading or validating a rule table
#[derive(Debug, Error)]
pub enum RuleTableError {
    /// The rules payload is not valid JSON for the table schema
    #[error("Failed to parse rules: {0}")]
    Parse(String),

    /// The rules file does not exist or cannot be read
    #[error("Rules file not found: {0}")]
    FileNotFound(String),

    /// The table parsed but is misconfigured
    #[error("Invalid rule table: {0}")]
    Invalid(String),
}

impl RuleTableError {
    pub fn invalid(message: impl Into<String>) -> Self {
        RuleTableError::Invalid(message.into())
    }
}
