//! Comprehensive tests for domain_ledger

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Amount, UserId};

use domain_ledger::error::{ExpenseError, LedgerError, ValidationError};
use domain_ledger::expense::{Expense, ExpenseMetadata};
use domain_ledger::ledger::{Balance, Ledger};
use domain_ledger::processor::ExpenseProcessor;
use domain_ledger::split::{SplitCalculator, SplitPolicy};

fn uid(id: &str) -> UserId {
    id.parse().unwrap()
}

fn ids(names: &[&str]) -> Vec<UserId> {
    names.iter().map(|n| uid(n)).collect()
}

fn amt(value: Decimal) -> Amount {
    Amount::new(value)
}

fn share_values(total: Decimal, names: &[&str], policy: SplitPolicy, values: &[Decimal]) -> Vec<Decimal> {
    SplitCalculator::compute(amt(total), &ids(names), policy, values)
        .unwrap()
        .iter()
        .map(|s| s.amount.value())
        .collect()
}

// ============================================================================
// Split Calculator Tests
// ============================================================================

mod split_tests {
    use super::*;

    #[test]
    fn test_equal_split_exact_division() {
        let shares = share_values(dec!(1000), &["u1", "u2", "u3", "u4"], SplitPolicy::Equal, &[]);
        assert_eq!(shares, vec![dec!(250), dec!(250), dec!(250), dec!(250)]);
    }

    #[test]
    fn test_equal_split_remainder_to_first() {
        let shares = share_values(dec!(1), &["u1", "u2", "u3"], SplitPolicy::Equal, &[]);
        assert_eq!(shares, vec![dec!(0.34), dec!(0.33), dec!(0.33)]);
    }

    #[test]
    fn test_equal_split_negative_remainder_to_first() {
        // base rounds up to 0.67, so the first share gives back the extra cent
        let shares = share_values(dec!(2), &["u1", "u2", "u3"], SplitPolicy::Equal, &[]);
        assert_eq!(shares, vec![dec!(0.66), dec!(0.67), dec!(0.67)]);
    }

    #[test]
    fn test_equal_split_single_participant() {
        let shares = share_values(dec!(12.34), &["u1"], SplitPolicy::Equal, &[]);
        assert_eq!(shares, vec![dec!(12.34)]);
    }

    #[test]
    fn test_exact_split_returns_values_verbatim() {
        let shares = share_values(dec!(1250), &["u2", "u3"], SplitPolicy::Exact, &[dec!(370), dec!(880)]);
        assert_eq!(shares, vec![dec!(370), dec!(880)]);
    }

    #[test]
    fn test_exact_split_sum_mismatch() {
        let result = SplitCalculator::compute(
            amt(dec!(1000)),
            &ids(&["u1", "u2"]),
            SplitPolicy::Exact,
            &[dec!(400), dec!(500)],
        );
        assert_eq!(
            result,
            Err(ValidationError::SumMismatch {
                expected: amt(dec!(1000)),
                actual: amt(dec!(900)),
            })
        );
    }

    #[test]
    fn test_percent_split() {
        let shares = share_values(
            dec!(1200),
            &["u1", "u2", "u3", "u4"],
            SplitPolicy::Percent,
            &[dec!(40), dec!(20), dec!(20), dec!(20)],
        );
        assert_eq!(shares, vec![dec!(480), dec!(240), dec!(240), dec!(240)]);
    }

    #[test]
    fn test_percent_split_remainder_to_last() {
        let shares = share_values(
            dec!(100),
            &["u1", "u2", "u3"],
            SplitPolicy::Percent,
            &[dec!(33.33), dec!(33.33), dec!(33.34)],
        );
        assert_eq!(shares, vec![dec!(33.33), dec!(33.33), dec!(33.34)]);

        let shares = share_values(
            dec!(0.10),
            &["u1", "u2", "u3"],
            SplitPolicy::Percent,
            &[dec!(33.33), dec!(33.33), dec!(33.34)],
        );
        assert_eq!(shares, vec![dec!(0.03), dec!(0.03), dec!(0.04)]);
    }

    #[test]
    fn test_percent_sum_not_hundred() {
        let result = SplitCalculator::compute(
            amt(dec!(100)),
            &ids(&["u1", "u2"]),
            SplitPolicy::Percent,
            &[dec!(40), dec!(50)],
        );
        assert_eq!(result, Err(ValidationError::PercentSumNotHundred(dec!(90))));
    }

    #[test]
    fn test_percent_sum_has_no_tolerance() {
        let result = SplitCalculator::compute(
            amt(dec!(100)),
            &ids(&["u1", "u2"]),
            SplitPolicy::Percent,
            &[dec!(50), dec!(49.99)],
        );
        assert!(matches!(result, Err(ValidationError::PercentSumNotHundred(_))));
    }

    #[test]
    fn test_unallocatable_remainder() {
        // 0.015 rounds to 0.02 twice, leaving -0.01 for the last participant
        let result = SplitCalculator::compute(
            amt(dec!(0.03)),
            &ids(&["u1", "u2", "u3"]),
            SplitPolicy::Percent,
            &[dec!(50), dec!(50), dec!(0)],
        );
        assert_eq!(result, Err(ValidationError::UnallocatableRemainder(amt(dec!(0.03)))));

        let result = SplitCalculator::compute(
            amt(dec!(0.07)),
            &ids(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]),
            SplitPolicy::Equal,
            &[],
        );
        assert!(matches!(result, Err(ValidationError::UnallocatableRemainder(_))));
    }
}

// ============================================================================
// Split Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    fn compute(total: Decimal, names: &[&str], policy: SplitPolicy, values: &[Decimal]) -> ValidationError {
        SplitCalculator::compute(amt(total), &ids(names), policy, values).unwrap_err()
    }

    #[test]
    fn test_empty_participants() {
        assert_eq!(compute(dec!(10), &[], SplitPolicy::Equal, &[]), ValidationError::EmptyParticipants);
    }

    #[test]
    fn test_non_positive_amount() {
        assert!(matches!(
            compute(dec!(0), &["u1"], SplitPolicy::Equal, &[]),
            ValidationError::NonPositiveAmount(_)
        ));
        assert!(matches!(
            compute(dec!(-10), &["u1"], SplitPolicy::Equal, &[]),
            ValidationError::NonPositiveAmount(_)
        ));
    }

    #[test]
    fn test_excess_precision_in_total() {
        assert_eq!(
            compute(dec!(10.001), &["u1"], SplitPolicy::Equal, &[]),
            ValidationError::ExcessPrecision(dec!(10.001))
        );
    }

    #[test]
    fn test_trailing_zeros_are_not_excess_precision() {
        let shares = share_values(dec!(10.000), &["u1", "u2"], SplitPolicy::Exact, &[dec!(4.000), dec!(6)]);
        assert_eq!(shares, vec![dec!(4), dec!(6)]);
    }

    #[test]
    fn test_duplicate_participant() {
        assert_eq!(
            compute(dec!(10), &["u1", "u2", "u1"], SplitPolicy::Equal, &[]),
            ValidationError::DuplicateParticipant("u1".to_string())
        );
    }

    #[test]
    fn test_bad_value_count() {
        assert_eq!(
            compute(dec!(10), &["u1", "u2"], SplitPolicy::Exact, &[dec!(10)]),
            ValidationError::BadValueCount { expected: 2, actual: 1 }
        );
        assert_eq!(
            compute(dec!(10), &["u1", "u2"], SplitPolicy::Percent, &[dec!(50), dec!(25), dec!(25)]),
            ValidationError::BadValueCount { expected: 2, actual: 3 }
        );
        assert_eq!(
            compute(dec!(10), &["u1", "u2"], SplitPolicy::Equal, &[dec!(5), dec!(5)]),
            ValidationError::BadValueCount { expected: 0, actual: 2 }
        );
    }

    #[test]
    fn test_negative_value() {
        assert_eq!(
            compute(dec!(10), &["u1", "u2"], SplitPolicy::Exact, &[dec!(15), dec!(-5)]),
            ValidationError::NegativeValue(dec!(-5))
        );
    }

    #[test]
    fn test_excess_precision_in_values() {
        assert_eq!(
            compute(dec!(10), &["u1", "u2"], SplitPolicy::Percent, &[dec!(33.333), dec!(66.667)]),
            ValidationError::ExcessPrecision(dec!(33.333))
        );
    }

    #[test]
    fn test_checks_run_in_order() {
        // duplicate participant is reported before the bad value count
        assert!(matches!(
            compute(dec!(10), &["u1", "u1"], SplitPolicy::Exact, &[]),
            ValidationError::DuplicateParticipant(_)
        ));
    }
}

// ============================================================================
// Ledger Tests
// ============================================================================

mod ledger_tests {
    use super::*;

    fn balance(debtor: &str, creditor: &str, amount: Decimal) -> Balance {
        Balance {
            debtor: uid(debtor),
            creditor: uid(creditor),
            amount: amt(amount),
        }
    }

    #[test]
    fn test_zero_cleanup() {
        let mut ledger = Ledger::new();
        ledger.record_debt(&uid("a"), &uid("b"), amt(dec!(100))).unwrap();
        ledger.record_debt(&uid("b"), &uid("a"), amt(dec!(100))).unwrap();

        assert!(ledger.balances().is_empty());
        assert!(ledger.owed(&uid("a"), &uid("b")).is_zero());
        assert!(ledger.owed(&uid("b"), &uid("a")).is_zero());
    }

    #[test]
    fn test_partial_offset_keeps_forward_direction() {
        let mut ledger = Ledger::new();
        ledger.record_debt(&uid("a"), &uid("b"), amt(dec!(30))).unwrap();
        ledger.record_debt(&uid("b"), &uid("a"), amt(dec!(10.25))).unwrap();
        ledger.record_debt(&uid("a"), &uid("b"), amt(dec!(5))).unwrap();

        assert_eq!(ledger.balances(), vec![balance("a", "b", dec!(24.75))]);
    }

    #[test]
    fn test_query_ordering() {
        let mut ledger = Ledger::new();
        ledger.record_debt(&uid("u3"), &uid("u1"), amt(dec!(3))).unwrap();
        ledger.record_debt(&uid("u2"), &uid("u4"), amt(dec!(2))).unwrap();
        ledger.record_debt(&uid("u2"), &uid("u1"), amt(dec!(1))).unwrap();

        assert_eq!(
            ledger.balances(),
            vec![
                balance("u2", "u1", dec!(1)),
                balance("u2", "u4", dec!(2)),
                balance("u3", "u1", dec!(3)),
            ]
        );
    }

    #[test]
    fn test_query_for_user_includes_both_directions() {
        let mut ledger = Ledger::new();
        ledger.record_debt(&uid("u1"), &uid("u4"), amt(dec!(230))).unwrap();
        ledger.record_debt(&uid("u2"), &uid("u1"), amt(dec!(620))).unwrap();
        ledger.record_debt(&uid("u3"), &uid("u4"), amt(dec!(240))).unwrap();

        assert_eq!(
            ledger.query(Some(&uid("u1"))),
            vec![balance("u1", "u4", dec!(230)), balance("u2", "u1", dec!(620))]
        );
        assert!(ledger.balances_for(&uid("u9")).is_empty());
    }

    #[test]
    fn test_net_position() {
        let mut ledger = Ledger::new();
        ledger.record_debt(&uid("u2"), &uid("u1"), amt(dec!(620))).unwrap();
        ledger.record_debt(&uid("u1"), &uid("u4"), amt(dec!(230))).unwrap();

        assert_eq!(ledger.net_position(&uid("u1")).unwrap().value(), dec!(390));
        assert_eq!(ledger.net_position(&uid("u2")).unwrap().value(), dec!(-620));
        assert!(ledger.net_position(&uid("u9")).unwrap().is_zero());
    }

    #[test]
    fn test_precondition_errors() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.record_debt(&uid("a"), &uid("a"), amt(dec!(5))),
            Err(LedgerError::SelfDebt("a".to_string()))
        );
        assert_eq!(
            ledger.record_debt(&uid("a"), &uid("b"), amt(dec!(-5))),
            Err(LedgerError::NonPositiveDebt(amt(dec!(-5))))
        );
    }
}

// ============================================================================
// Expense Processor Tests
// ============================================================================

mod processor_tests {
    use super::*;

    fn expense(payer: &str, total: Decimal, names: &[&str], policy: SplitPolicy, values: &[Decimal]) -> Expense {
        Expense::new(uid(payer), amt(total), ids(names), policy).with_values(values.to_vec())
    }

    #[test]
    fn test_sample_sequence() {
        let mut ledger = Ledger::new();
        let processor = ExpenseProcessor::new();

        processor
            .process(&mut ledger, &expense("u1", dec!(1000), &["u1", "u2", "u3", "u4"], SplitPolicy::Equal, &[]))
            .unwrap();
        assert_eq!(ledger.owed(&uid("u4"), &uid("u1")).value(), dec!(250));

        processor
            .process(&mut ledger, &expense("u1", dec!(1250), &["u2", "u3"], SplitPolicy::Exact, &[dec!(370), dec!(880)]))
            .unwrap();
        assert_eq!(ledger.owed(&uid("u2"), &uid("u1")).value(), dec!(620));
        assert_eq!(ledger.owed(&uid("u3"), &uid("u1")).value(), dec!(1130));

        processor
            .process(
                &mut ledger,
                &expense(
                    "u4",
                    dec!(1200),
                    &["u1", "u2", "u3", "u4"],
                    SplitPolicy::Percent,
                    &[dec!(40), dec!(20), dec!(20), dec!(20)],
                ),
            )
            .unwrap();

        assert_eq!(ledger.owed(&uid("u1"), &uid("u4")).value(), dec!(230));
        assert!(ledger.owed(&uid("u4"), &uid("u1")).is_zero());
        assert_eq!(ledger.owed(&uid("u2"), &uid("u1")).value(), dec!(620));
        assert_eq!(ledger.owed(&uid("u2"), &uid("u4")).value(), dec!(240));
        assert_eq!(ledger.owed(&uid("u3"), &uid("u4")).value(), dec!(240));
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn test_payer_not_among_participants() {
        let mut ledger = Ledger::new();
        let receipt = ExpenseProcessor::new()
            .process(&mut ledger, &expense("u1", dec!(90), &["u2", "u3", "u4"], SplitPolicy::Equal, &[]))
            .unwrap();

        assert_eq!(receipt.recorded, 3);
        assert_eq!(ledger.net_position(&uid("u1")).unwrap().value(), dec!(90));
    }

    #[test]
    fn test_payer_alone_records_nothing() {
        let mut ledger = Ledger::new();
        let receipt = ExpenseProcessor::new()
            .process(&mut ledger, &expense("u1", dec!(50), &["u1"], SplitPolicy::Equal, &[]))
            .unwrap();

        assert_eq!(receipt.recorded, 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_validation_failure_is_not_partially_applied() {
        let mut ledger = Ledger::new();
        let processor = ExpenseProcessor::new();
        processor
            .process(&mut ledger, &expense("u1", dec!(100), &["u2"], SplitPolicy::Equal, &[]))
            .unwrap();
        let before = ledger.balances();

        let result = processor.process(
            &mut ledger,
            &expense("u1", dec!(100), &["u2", "u3"], SplitPolicy::Percent, &[dec!(60), dec!(60)]),
        );

        assert!(matches!(
            result,
            Err(ExpenseError::Validation(ValidationError::PercentSumNotHundred(_)))
        ));
        assert_eq!(ledger.balances(), before);
    }

    #[test]
    fn test_metadata_is_optional() {
        let plain = expense("u1", dec!(10), &["u2"], SplitPolicy::Equal, &[]);
        assert_eq!(plain.name(), None);

        let named = plain.with_metadata(ExpenseMetadata {
            name: Some("Dinner".to_string()),
            ..Default::default()
        });
        assert_eq!(named.name(), Some("Dinner"));

        let mut ledger = Ledger::new();
        let receipt = ExpenseProcessor::new().process(&mut ledger, &named).unwrap();
        assert_eq!(receipt.recorded, 1);
    }

    #[test]
    fn test_receipt_serializes() {
        let mut ledger = Ledger::new();
        let receipt = ExpenseProcessor::new()
            .process(&mut ledger, &expense("u1", dec!(10), &["u1", "u2"], SplitPolicy::Equal, &[]))
            .unwrap();

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["recorded"], 1);
        assert_eq!(json["shares"][1]["user_id"], "u2");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn debt_strategy() -> impl Strategy<Value = (bool, i64)> {
        (any::<bool>(), 1i64..100_000i64)
    }

    proptest! {
        #[test]
        fn at_most_one_direction_between_two_users(
            debts in proptest::collection::vec(debt_strategy(), 1..50)
        ) {
            let (a, b) = (uid("a"), uid("b"));
            let mut ledger = Ledger::new();
            let mut signed_total = Decimal::ZERO;

            for (forward, cents) in debts {
                let amount = Decimal::new(cents, 2);
                if forward {
                    ledger.record_debt(&a, &b, amt(amount)).unwrap();
                    signed_total += amount;
                } else {
                    ledger.record_debt(&b, &a, amt(amount)).unwrap();
                    signed_total -= amount;
                }

                let ab = ledger.owed(&a, &b);
                let ba = ledger.owed(&b, &a);
                prop_assert!(ab.is_zero() || ba.is_zero());
                prop_assert!(!ab.is_negative() && !ba.is_negative());
                prop_assert_eq!((ab - ba).value(), signed_total);
                prop_assert!(ledger.balances().iter().all(|b| b.amount.is_positive()));
            }
        }

        #[test]
        fn exact_shares_are_returned_verbatim(
            cents in proptest::collection::vec(0i64..1_000_000i64, 1..8)
        ) {
            let values: Vec<Decimal> = cents.iter().map(|c| Decimal::new(*c, 2)).collect();
            let total: Decimal = values.iter().sum();
            prop_assume!(total > Decimal::ZERO);

            let names: Vec<String> = (0..values.len()).map(|i| format!("p{}", i)).collect();
            let people: Vec<UserId> = names.iter().map(|n| uid(n)).collect();
            let shares = SplitCalculator::compute(amt(total), &people, SplitPolicy::Exact, &values).unwrap();

            prop_assert_eq!(shares.iter().map(|s| s.amount.value()).collect::<Vec<_>>(), values);
        }
    }
}
