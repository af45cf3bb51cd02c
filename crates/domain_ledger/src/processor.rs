//! Expense processing
//!
//! Applies one expense to the ledger: split first, then record a debt from
//! every other participant to the payer. A split that fails validation
//! leaves the ledger untouched.

use serde::Serialize;

use core_kernel::ExpenseId;
use crate::error::ExpenseError;
use crate::expense::Expense;
use crate::ledger::Ledger;
use crate::split::{Share, SplitCalculator};

/// Outcome of a processed expense
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseReceipt {
    /// Identifier assigned to this expense
    pub expense_id: ExpenseId,
    /// Computed shares, in participant order
    pub shares: Vec<Share>,
    /// Number of debts written to the ledger
    pub recorded: usize,
}

/// Orchestrates splitting an expense and recording the resulting debts
#[derive(Debug, Default)]
pub struct ExpenseProcessor;

impl ExpenseProcessor {
    /// Creates a new expense processor
    pub fn new() -> Self {
        Self
    }

    /// Applies `expense` to `ledger`
    ///
    /// This method:
    /// 1. Computes the shares, propagating any validation failure
    /// 2. For each participant other than the payer with a positive share,
    ///    records that the participant owes the payer that share
    ///
    /// # Errors
    ///
    /// - `ExpenseError::Validation` if the split is rejected
    /// - `ExpenseError::Ledger` if a resulting debt is out of range
    ///
    /// The ledger is not modified when an error is returned.
    pub fn process(&self, ledger: &mut Ledger, expense: &Expense) -> Result<ExpenseReceipt, ExpenseError> {
        let expense_id = ExpenseId::new_v7();

        let shares = SplitCalculator::compute(
            expense.total_amount,
            &expense.participant_ids,
            expense.policy,
            &expense.policy_values,
        )?;

        let debts: Vec<&Share> = shares
            .iter()
            .filter(|share| share.user_id != expense.payer_id && share.amount.is_positive())
            .collect();

        // Participants are distinct, so each debt touches its own pair and
        // checking them one by one against the current ledger is exact.
        for share in &debts {
            ledger.netted_debt(&share.user_id, &expense.payer_id, share.amount)?;
        }
        for share in &debts {
            ledger.record_debt(&share.user_id, &expense.payer_id, share.amount)?;
        }
        let recorded = debts.len();

        tracing::info!(
            %expense_id,
            payer = %expense.payer_id,
            total = %expense.total_amount,
            policy = %expense.policy,
            participants = expense.participant_ids.len(),
            recorded,
            name = expense.name().unwrap_or_default(),
            "expense processed"
        );

        Ok(ExpenseReceipt {
            expense_id,
            shares,
            recorded,
        })
    }
}
