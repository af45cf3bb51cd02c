//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for ledgers and output lines that
//! give more meaningful error messages than standard assertions.

use core_kernel::Amount;
use domain_ledger::Ledger;
use rust_decimal::Decimal;

/// Asserts that a ledger is in canonical form
///
/// Every edge must be positive at cent precision, no user may owe themselves,
/// and no pair of users may have edges in both directions.
///
/// # Panics
///
/// Panics describing the first violating edge
pub fn assert_ledger_canonical(ledger: &Ledger) {
    for balance in ledger.balances() {
        assert!(
            balance.amount.is_positive(),
            "Expected positive edge, got {} -> {}: {}",
            balance.debtor,
            balance.creditor,
            balance.amount
        );
        assert!(
            balance.amount.is_cent_precise(),
            "Edge {} -> {} has more than two decimal places: {}",
            balance.debtor,
            balance.creditor,
            balance.amount
        );
        assert_ne!(balance.debtor, balance.creditor, "Self-debt stored for {}", balance.debtor);
        assert!(
            ledger.owed(&balance.creditor, &balance.debtor).is_zero(),
            "Both directions stored between {} and {}",
            balance.debtor,
            balance.creditor
        );
    }
}

/// Asserts that the net positions across all users sum to zero
///
/// # Panics
///
/// Panics if the sum is not zero
pub fn assert_ledger_balanced(ledger: &Ledger) {
    let mut users: Vec<_> = ledger
        .balances()
        .into_iter()
        .flat_map(|balance| [balance.debtor, balance.creditor])
        .collect();
    users.sort();
    users.dedup();

    let positions: Vec<Amount> = users
        .iter()
        .map(|user| {
            ledger
                .net_position(user)
                .unwrap_or_else(|| panic!("Net position of {} is out of range", user))
        })
        .collect();
    let total = Amount::checked_sum(&positions).unwrap_or_else(|| panic!("Net positions overflow"));
    assert!(total.is_zero(), "Net positions sum to {}, expected 0", total);
}

/// Asserts that the ledger holds exactly the given `(debtor, creditor, amount)` edges
///
/// Expected edges must be listed in (debtor, creditor) order.
///
/// # Panics
///
/// Panics with both edge lists if they differ
pub fn assert_balances(ledger: &Ledger, expected: &[(&str, &str, Decimal)]) {
    let actual: Vec<(String, String, Decimal)> = ledger
        .balances()
        .into_iter()
        .map(|b| (b.debtor.to_string(), b.creditor.to_string(), b.amount.value().normalize()))
        .collect();
    let expected: Vec<(String, String, Decimal)> = expected
        .iter()
        .map(|(debtor, creditor, amount)| (debtor.to_string(), creditor.to_string(), amount.normalize()))
        .collect();
    assert_eq!(actual, expected, "Ledger balances differ");
}

/// Asserts that captured output consists of exactly the expected lines
///
/// # Panics
///
/// Panics with both line lists if they differ
pub fn assert_output_lines(output: &[u8], expected: &[&str]) {
    let text = String::from_utf8_lossy(output);
    let actual: Vec<&str> = text.lines().collect();
    assert_eq!(
        actual, expected,
        "Output lines differ:\n  actual:   {:?}\n  expected: {:?}",
        actual, expected
    );
}
