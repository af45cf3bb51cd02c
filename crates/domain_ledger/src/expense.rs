//! Expense input type
//!
//! An expense is built per command and dropped once processed; only its
//! effect on the ledger survives.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, UserId};
use crate::split::SplitPolicy;

/// Optional descriptive details attached to an expense
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseMetadata {
    /// Short name, e.g. "Dinner"
    pub name: Option<String>,
    /// Link to a receipt image
    pub img_url: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// A payment made by one user on behalf of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// User who paid
    pub payer_id: UserId,
    /// Total paid
    pub total_amount: Amount,
    /// Users sharing the cost, in order; may include the payer
    pub participant_ids: Vec<UserId>,
    /// How the total is divided
    pub policy: SplitPolicy,
    /// Exact amounts or percentages, one per participant
    pub policy_values: Vec<Decimal>,
    /// Optional descriptive details
    pub metadata: Option<ExpenseMetadata>,
}

impl Expense {
    /// Creates an expense with no policy values
    ///
    /// # Arguments
    ///
    /// * `payer_id` - User who paid
    /// * `total_amount` - Total paid
    /// * `participant_ids` - Users sharing the cost
    /// * `policy` - How the total is divided
    pub fn new(
        payer_id: UserId,
        total_amount: Amount,
        participant_ids: Vec<UserId>,
        policy: SplitPolicy,
    ) -> Self {
        Self {
            payer_id,
            total_amount,
            participant_ids,
            policy,
            policy_values: Vec::new(),
            metadata: None,
        }
    }

    /// Sets the exact amounts or percentages
    pub fn with_values(mut self, values: Vec<Decimal>) -> Self {
        self.policy_values = values;
        self
    }

    /// Attaches descriptive details
    pub fn with_metadata(mut self, metadata: ExpenseMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Returns the expense name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.name.as_deref())
    }
}
