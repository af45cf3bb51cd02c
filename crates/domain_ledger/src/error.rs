//! Ledger domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::Amount;

/// Reasons an expense split is rejected
///
/// All of these are detected before the ledger is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No participants were given
    #[error("Expense has no participants")]
    EmptyParticipants,

    /// Total is zero or negative
    #[error("Expense amount must be positive, got {0}")]
    NonPositiveAmount(Amount),

    /// A participant appears more than once
    #[error("Duplicate participant: {0}")]
    DuplicateParticipant(String),

    /// Wrong number of policy values for the policy
    #[error("Expected {expected} split values, got {actual}")]
    BadValueCount {
        expected: usize,
        actual: usize,
    },

    /// Exact shares do not add up to the total
    #[error("Exact shares sum to {actual}, expected {expected}")]
    SumMismatch {
        expected: Amount,
        actual: Amount,
    },

    /// Percentages do not add up to 100
    #[error("Percentages sum to {0}, expected 100")]
    PercentSumNotHundred(Decimal),

    /// A policy value is negative
    #[error("Split value cannot be negative: {0}")]
    NegativeValue(Decimal),

    /// A figure has more than two fractional digits
    #[error("Value has more than two decimal places: {0}")]
    ExcessPrecision(Decimal),

    /// The total is too large to divide into shares
    #[error("Amount {0} is too large to split")]
    AmountOutOfRange(Amount),

    /// The split values add up to more than can be represented
    #[error("Split values are too large to add up")]
    ValuesOutOfRange,

    /// The rounding remainder would leave a participant with a negative share
    #[error("Amount {0} is too small to split this way")]
    UnallocatableRemainder(Amount),
}

/// Violations of `Ledger::record_debt` preconditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Debtor and creditor are the same user
    #[error("User cannot owe themselves: {0}")]
    SelfDebt(String),

    /// Debt amount is zero or negative
    #[error("Debt amount must be positive, got {0}")]
    NonPositiveDebt(Amount),

    /// Netting the debt would exceed the representable range
    #[error("Debt from {debtor} to {creditor} is out of range")]
    Overflow {
        debtor: String,
        creditor: String,
    },
}

/// Errors that can occur while processing an expense
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
