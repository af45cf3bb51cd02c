//! Core Kernel - Foundational types for the shared-expense ledger
//!
//! This crate provides the building blocks used by every other crate:
//! - Amounts with exact decimal arithmetic at cent precision
//! - Identifiers for users and processed expenses
//! - The kernel error type

pub mod amount;
pub mod identifiers;
pub mod error;

pub use amount::{Amount, MoneyError, CENT_SCALE};
pub use identifiers::{UserId, ExpenseId};
pub use error::CoreError;
