//! Core Kernel - Foundational types for the claims audit system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money and Rate types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Shared error types

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{CaseId, RuleSetId};
pub use money::{Money, Rate};
