//! Test Utilities
//!
//! Shared builders and fixtures for the claims audit test suites. Builders
//! construct records and rule tables with sensible defaults so tests only
//! spell out the fields they care about; fixtures provide the canonical
//! demo rule table and claims used by the end-to-end suites.

pub mod builders;
pub mod fixtures;

pub use builders::{ClaimRecordBuilder, RuleTableBuilder};
pub use fixtures::{demo_claims, demo_rule_table};
