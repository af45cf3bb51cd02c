//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! split ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built users and directories
//! - `builders`: Builder patterns for expenses
//! - `assertions`: Custom assertion helpers for ledgers and output lines
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
