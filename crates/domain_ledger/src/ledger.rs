//! Pairwise debt ledger
//!
//! This module stores who owes whom as a sparse adjacency map and keeps it in
//! canonical form as debts are recorded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::{Amount, UserId};
use crate::error::LedgerError;

/// The ledger of outstanding debts between users
///
/// Edges are keyed debtor first, then creditor. Both levels are ordered maps,
/// so iteration yields edges sorted by (debtor id, creditor id).
///
/// # Invariants
///
/// - For any two users at most one of `a -> b`, `b -> a` is present
/// - Every stored amount is positive at cent precision
/// - No user owes themselves
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// debtor -> creditor -> amount owed
    edges: BTreeMap<UserId, BTreeMap<UserId, Amount>>,
}

/// A single outstanding debt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// User who owes
    pub debtor: UserId,
    /// User who is owed
    pub creditor: UserId,
    /// Amount owed, always positive
    pub amount: Amount,
}

impl Ledger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `debtor` owes `creditor` a further `amount`
    ///
    /// The new debt is netted against anything `creditor` already owes
    /// `debtor`: an opposite debt is treated as a negative forward debt, and
    /// whichever direction remains positive is the only one kept.
    ///
    /// # Arguments
    ///
    /// * `debtor` - User taking on the debt
    /// * `creditor` - User the debt is owed to
    /// * `amount` - Positive amount owed
    ///
    /// # Errors
    ///
    /// - `LedgerError::SelfDebt` if `debtor == creditor`
    /// - `LedgerError::NonPositiveDebt` if `amount <= 0`
    /// - `LedgerError::Overflow` if the netted debt cannot be represented;
    ///   the ledger is left unchanged
    pub fn record_debt(
        &mut self,
        debtor: &UserId,
        creditor: &UserId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let net = self.netted_debt(debtor, creditor, amount)?;

        if net.is_positive() {
            self.set(debtor, creditor, net);
            self.remove(creditor, debtor);
        } else if net.is_negative() {
            self.set(creditor, debtor, -net);
            self.remove(debtor, creditor);
        } else {
            self.remove(debtor, creditor);
            self.remove(creditor, debtor);
        }

        tracing::debug!(
            %debtor,
            %creditor,
            %amount,
            %net,
            "debt recorded"
        );

        Ok(())
    }

    /// Returns what `debtor` would owe `creditor` after recording `amount`
    ///
    /// A negative result means `creditor` would owe `debtor`. The ledger is
    /// not modified, so callers can check a batch of debts before writing any.
    ///
    /// # Errors
    ///
    /// Same as [`Ledger::record_debt`]
    pub fn netted_debt(
        &self,
        debtor: &UserId,
        creditor: &UserId,
        amount: Amount,
    ) -> Result<Amount, LedgerError> {
        if debtor == creditor {
            return Err(LedgerError::SelfDebt(debtor.to_string()));
        }
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveDebt(amount));
        }

        let forward = self.owed(debtor, creditor);
        let backward = self.owed(creditor, debtor);
        forward
            .checked_sub(backward)
            .and_then(|balance| balance.checked_add(amount))
            .map(|net| net.round())
            .ok_or_else(|| LedgerError::Overflow {
                debtor: debtor.to_string(),
                creditor: creditor.to_string(),
            })
    }

    /// Returns how much `debtor` currently owes `creditor` (zero if nothing)
    pub fn owed(&self, debtor: &UserId, creditor: &UserId) -> Amount {
        self.edges
            .get(debtor)
            .and_then(|creditors| creditors.get(creditor))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Lists outstanding debts
    ///
    /// # Arguments
    ///
    /// * `user` - When given, only debts where this user is debtor or creditor
    ///
    /// # Returns
    ///
    /// Debts ordered by debtor id, then creditor id. Empty if nothing is owed.
    pub fn query(&self, user: Option<&UserId>) -> Vec<Balance> {
        self.edges
            .iter()
            .flat_map(|(debtor, creditors)| {
                creditors.iter().map(move |(creditor, amount)| (debtor, creditor, *amount))
            })
            .filter(|(debtor, creditor, _)| {
                user.map_or(true, |u| *debtor == u || *creditor == u)
            })
            .map(|(debtor, creditor, amount)| Balance {
                debtor: debtor.clone(),
                creditor: creditor.clone(),
                amount,
            })
            .collect()
    }

    /// Lists every outstanding debt
    pub fn balances(&self) -> Vec<Balance> {
        self.query(None)
    }

    /// Lists debts involving `user`
    pub fn balances_for(&self, user: &UserId) -> Vec<Balance> {
        self.query(Some(user))
    }

    /// Returns what others owe `user` minus what `user` owes others
    ///
    /// `None` if the position exceeds the representable range.
    pub fn net_position(&self, user: &UserId) -> Option<Amount> {
        self.balances_for(user)
            .into_iter()
            .try_fold(Amount::ZERO, |position, b| {
                if &b.creditor == user {
                    position.checked_add(b.amount)
                } else {
                    position.checked_sub(b.amount)
                }
            })
    }

    /// Number of outstanding debts
    pub fn len(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    /// Returns true if nobody owes anybody
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn set(&mut self, debtor: &UserId, creditor: &UserId, amount: Amount) {
        self.edges
            .entry(debtor.clone())
            .or_default()
            .insert(creditor.clone(), amount);
    }

    fn remove(&mut self, debtor: &UserId, creditor: &UserId) {
        if let Some(creditors) = self.edges.get_mut(debtor) {
            creditors.remove(creditor);
            if creditors.is_empty() {
                self.edges.remove(debtor);
            }
        }
    }
}
