//! Test Data Builders
//!
//! Provides builder patterns for constructing expenses with sensible defaults.
//! Tests specify only the relevant fields and use defaults for everything else.

use core_kernel::{Amount, UserId};
use domain_ledger::{Expense, ExpenseMetadata, SplitPolicy};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::UserFixtures;

/// Builder for constructing test expenses
///
/// Defaults to `u1` paying 1000 split equally between `u1`..`u4`.
pub struct ExpenseBuilder {
    payer: UserId,
    total: Decimal,
    participants: Vec<UserId>,
    policy: SplitPolicy,
    values: Vec<Decimal>,
    metadata: Option<ExpenseMetadata>,
}

impl Default for ExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            payer: UserFixtures::u1(),
            total: dec!(1000),
            participants: UserFixtures::all(),
            policy: SplitPolicy::Equal,
            values: Vec::new(),
            metadata: None,
        }
    }

    /// Sets the payer
    pub fn paid_by(mut self, payer: &str) -> Self {
        self.payer = UserFixtures::id(payer);
        self
    }

    /// Sets the total
    pub fn total(mut self, total: Decimal) -> Self {
        self.total = total;
        self
    }

    /// Sets the participants
    pub fn participants(mut self, ids: &[&str]) -> Self {
        self.participants = ids.iter().map(|raw| UserFixtures::id(raw)).collect();
        self
    }

    /// Splits equally
    pub fn equal(mut self) -> Self {
        self.policy = SplitPolicy::Equal;
        self.values.clear();
        self
    }

    /// Splits by exact amounts, one per participant
    pub fn exact(mut self, amounts: &[Decimal]) -> Self {
        self.policy = SplitPolicy::Exact;
        self.values = amounts.to_vec();
        self
    }

    /// Splits by percentages, one per participant
    pub fn percent(mut self, percentages: &[Decimal]) -> Self {
        self.policy = SplitPolicy::Percent;
        self.values = percentages.to_vec();
        self
    }

    /// Sets the policy values without changing the policy
    pub fn values(mut self, values: &[Decimal]) -> Self {
        self.values = values.to_vec();
        self
    }

    /// Names the expense
    pub fn named(mut self, name: &str) -> Self {
        self.metadata = Some(ExpenseMetadata {
            name: Some(name.to_string()),
            ..ExpenseMetadata::default()
        });
        self
    }

    /// Builds the expense
    pub fn build(self) -> Expense {
        let expense = Expense::new(self.payer, Amount::new(self.total), self.participants, self.policy)
            .with_values(self.values);
        match self.metadata {
            Some(metadata) => expense.with_metadata(metadata),
            None => expense,
        }
    }
}
