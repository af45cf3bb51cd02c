//! Balance Ledger Domain
//!
//! This crate turns shared expenses into a canonical record of who owes whom.
//!
//! # Flow
//!
//! 1. [`SplitCalculator`] divides an expense total into per-participant
//!    [`Share`]s according to a [`SplitPolicy`] and validates the result.
//! 2. [`ExpenseProcessor`] records a debt from every participant other than
//!    the payer to the payer.
//! 3. [`Ledger`] nets each new debt against any debt in the opposite
//!    direction, so between two users there is at most one edge.
//!
//! # Ledger Invariants
//!
//! - At most one direction of debt exists between any pair of users
//! - No edge with a zero or negative amount is stored
//! - Nobody owes themselves
//!
//! # Example
//!
//! ```rust
//! use domain_ledger::{Expense, ExpenseProcessor, Ledger, SplitPolicy};
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = Ledger::new();
//! let expense = Expense::new(
//!     "u1".parse().unwrap(),
//!     dec!(1000).into(),
//!     ["u1", "u2", "u3", "u4"].iter().map(|id| id.parse().unwrap()).collect(),
//!     SplitPolicy::Equal,
//! );
//!
//! ExpenseProcessor::new().process(&mut ledger, &expense).unwrap();
//! assert_eq!(ledger.owed(&"u4".parse().unwrap(), &"u1".parse().unwrap()), dec!(250).into());
//! ```

pub mod split;
pub mod expense;
pub mod ledger;
pub mod processor;
pub mod error;

pub use split::{SplitCalculator, SplitPolicy, Share};
pub use expense::{Expense, ExpenseMetadata};
pub use ledger::{Ledger, Balance};
pub use processor::{ExpenseProcessor, ExpenseReceipt};
pub use error::{ValidationError, LedgerError, ExpenseError};
