//! Split calculation
//!
//! Turns an expense total into one share per participant. Shares are held at
//! cent precision and always add back up to the total exactly: whatever
//! rounding leaves over is absorbed by a single participant (the first for
//! equal splits, the last for percentage splits).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use core_kernel::amount::fits_cent_precision;
use core_kernel::{Amount, MoneyError, UserId};
use crate::error::ValidationError;

const HUNDRED: Decimal = dec!(100);

/// Rule for dividing an expense total among its participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SplitPolicy {
    /// Everyone pays the same, rounding remainder to the first participant
    Equal,
    /// Caller supplies each participant's amount
    Exact,
    /// Caller supplies each participant's percentage of the total
    Percent,
}

impl SplitPolicy {
    /// Returns true if the policy needs one value per participant
    pub fn takes_values(&self) -> bool {
        !matches!(self, SplitPolicy::Equal)
    }

    /// Returns the command-line token for this policy
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitPolicy::Equal => "EQUAL",
            SplitPolicy::Exact => "EXACT",
            SplitPolicy::Percent => "PERCENT",
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised policy token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown split policy: {0}")]
pub struct UnknownSplitPolicy(pub String);

impl FromStr for SplitPolicy {
    type Err = UnknownSplitPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EQUAL" => Ok(SplitPolicy::Equal),
            "EXACT" => Ok(SplitPolicy::Exact),
            "PERCENT" => Ok(SplitPolicy::Percent),
            other => Err(UnknownSplitPolicy(other.to_string())),
        }
    }
}

/// One participant's portion of an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// Participant
    pub user_id: UserId,
    /// Portion of the total, at cent precision
    pub amount: Amount,
}

/// Computes per-participant shares for an expense
pub struct SplitCalculator;

impl SplitCalculator {
    /// Splits `total` among `participants` according to `policy`
    ///
    /// # Arguments
    ///
    /// * `total` - Expense total, positive with at most two decimal places
    /// * `participants` - Distinct participants, in output order
    /// * `policy` - How to divide the total
    /// * `values` - Exact amounts or percentages, one per participant;
    ///   empty for `SplitPolicy::Equal`
    ///
    /// # Returns
    ///
    /// One share per participant, in participant order, summing to `total`
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` describing the first rule the input breaks.
    pub fn compute(
        total: Amount,
        participants: &[UserId],
        policy: SplitPolicy,
        values: &[Decimal],
    ) -> Result<Vec<Share>, ValidationError> {
        Self::validate(total, participants, policy, values)?;

        let amounts = match policy {
            SplitPolicy::Equal => {
                let parts = total
                    .allocate(participants.len())
                    .map_err(|e| Self::allocation_error(total, e))?;
                Self::ensure_non_negative(total, parts)?
            }
            SplitPolicy::Exact => {
                let parts: Vec<Amount> = values.iter().copied().map(Amount::new).collect();
                let actual = Amount::checked_sum(&parts).ok_or(ValidationError::ValuesOutOfRange)?;
                if actual != total {
                    return Err(ValidationError::SumMismatch {
                        expected: total,
                        actual,
                    });
                }
                parts
            }
            SplitPolicy::Percent => {
                let percent_total = values
                    .iter()
                    .try_fold(Decimal::ZERO, |sum, value| sum.checked_add(*value))
                    .ok_or(ValidationError::ValuesOutOfRange)?;
                if percent_total != HUNDRED {
                    return Err(ValidationError::PercentSumNotHundred(percent_total));
                }
                let parts = total
                    .allocate_by_percentages(values)
                    .map_err(|e| Self::allocation_error(total, e))?;
                Self::ensure_non_negative(total, parts)?
            }
        };

        Ok(participants
            .iter()
            .cloned()
            .zip(amounts)
            .map(|(user_id, amount)| Share { user_id, amount })
            .collect())
    }

    /// Policy-independent checks, in the order they are reported
    fn validate(
        total: Amount,
        participants: &[UserId],
        policy: SplitPolicy,
        values: &[Decimal],
    ) -> Result<(), ValidationError> {
        if participants.is_empty() {
            return Err(ValidationError::EmptyParticipants);
        }

        if !total.is_positive() {
            return Err(ValidationError::NonPositiveAmount(total));
        }

        if !total.is_cent_precise() {
            return Err(ValidationError::ExcessPrecision(total.value()));
        }

        let mut seen = HashSet::with_capacity(participants.len());
        if let Some(duplicate) = participants.iter().find(|id| !seen.insert(*id)) {
            return Err(ValidationError::DuplicateParticipant(duplicate.to_string()));
        }

        let expected = if policy.takes_values() { participants.len() } else { 0 };
        if values.len() != expected {
            return Err(ValidationError::BadValueCount {
                expected,
                actual: values.len(),
            });
        }

        if let Some(negative) = values.iter().find(|v| v.is_sign_negative() && !v.is_zero()) {
            return Err(ValidationError::NegativeValue(*negative));
        }

        if let Some(imprecise) = values.iter().find(|v| !fits_cent_precision(**v)) {
            return Err(ValidationError::ExcessPrecision(*imprecise));
        }

        Ok(())
    }

    fn allocation_error(total: Amount, error: MoneyError) -> ValidationError {
        match error {
            MoneyError::EmptyAllocation => ValidationError::EmptyParticipants,
            MoneyError::Overflow | MoneyError::InvalidAmount(_) => ValidationError::AmountOutOfRange(total),
        }
    }

    fn ensure_non_negative(total: Amount, parts: Vec<Amount>) -> Result<Vec<Amount>, ValidationError> {
        if parts.iter().any(Amount::is_negative) {
            return Err(ValidationError::UnallocatableRemainder(total));
        }
        Ok(parts)
    }
}
