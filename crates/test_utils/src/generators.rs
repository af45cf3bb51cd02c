//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating expenses and ledger
//! operations that respect input validation rules.

use core_kernel::UserId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::UserFixtures;

/// Strategy for positive cent amounts in minor units
pub fn positive_cents_strategy() -> impl Strategy<Value = i64> {
    1i64..10_000_000i64
}

/// Strategy for positive amounts with at most two decimal places
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    positive_cents_strategy().prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for one of `count` user ids (`u1`..`u<count>`)
pub fn user_strategy(count: usize) -> impl Strategy<Value = UserId> {
    (1..=count).prop_map(|n| UserFixtures::id(&format!("u{}", n)))
}

/// Strategy for a non-empty list of distinct participants drawn from `u1`..`u<count>`
pub fn participants_strategy(count: usize) -> impl Strategy<Value = Vec<UserId>> {
    proptest::sample::subsequence((1..=count).collect::<Vec<_>>(), 1..=count)
        .prop_map(|ns| ns.into_iter().map(|n| UserFixtures::id(&format!("u{}", n))).collect())
}

/// Strategy for `n` whole percentages that sum to 100
pub fn percentages_strategy(n: usize) -> impl Strategy<Value = Vec<Decimal>> {
    proptest::collection::vec(0u32..=100u32, n.saturating_sub(1)).prop_map(move |mut cuts| {
        cuts.sort_unstable();
        let mut previous = 0u32;
        let mut parts = Vec::with_capacity(n);
        for cut in cuts {
            parts.push(Decimal::from(cut - previous));
            previous = cut;
        }
        parts.push(Decimal::from(100 - previous));
        parts
    })
}

/// Strategy for a sequence of `(debtor, creditor, cents)` debts between distinct users
pub fn debt_sequence_strategy(users: usize, max_len: usize) -> impl Strategy<Value = Vec<(UserId, UserId, i64)>> {
    proptest::collection::vec(
        (user_strategy(users), user_strategy(users), positive_cents_strategy())
            .prop_filter("debtor and creditor must differ", |(a, b, _)| a != b),
        0..max_len,
    )
}
