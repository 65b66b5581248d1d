//! Command-Line Interface
//!
//! Wires the full audit workflow together: extraction, compliance
//! evaluation, and the decision engine, plus batch summaries for reporting.
//! The library half is kept thin and testable; the `claims-audit` binary
//! only parses arguments, loads configuration, and prints.

pub mod config;
pub mod pipeline;
pub mod summary;

pub use config::CliConfig;
pub use pipeline::{AuditOutcome, AuditPipeline};
pub use summary::BatchSummary;
