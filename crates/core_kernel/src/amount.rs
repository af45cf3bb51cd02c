//! Monetary amounts with exact decimal arithmetic
//!
//! Every amount in the ledger is a plain quantity of a single, implicit
//! currency held at cent precision. `rust_decimal` gives exact arithmetic, so
//! shares always add back up to the expense they came from.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Number of fractional digits every settled amount carries
pub const CENT_SCALE: u32 = 2;

const HUNDRED: Decimal = dec!(100);

/// Errors that can occur during amount operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Cannot allocate to zero parts")]
    EmptyAllocation,

    #[error("Amount out of range")]
    Overflow,
}

/// A monetary amount
///
/// `Amount::new` keeps the value exactly as given so callers can check
/// precision before anything is rounded; `Amount::rounded` snaps to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Creates an amount without rounding
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates an amount rounded to cent precision
    pub fn rounded(value: Decimal) -> Self {
        Self(value.round_dp(CENT_SCALE))
    }

    /// Returns the underlying decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rounds to cent precision
    pub fn round(&self) -> Self {
        Self::rounded(self.0)
    }

    /// Returns true if the amount has no digits beyond the cent
    pub fn is_cent_precise(&self) -> bool {
        fits_cent_precision(self.0)
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Adds two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Subtracts `other`, returning `None` on overflow
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }

    /// Sums amounts, returning `None` if any partial sum overflows
    pub fn checked_sum<'a>(amounts: impl IntoIterator<Item = &'a Amount>) -> Option<Amount> {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, |total, amount| total.checked_add(*amount))
    }

    /// Splits the amount into `n` parts at cent precision.
    ///
    /// Every part is `round(self / n)` except the first, which takes
    /// `self - base * (n - 1)` so the parts always sum to `self`. The first
    /// part can come out negative for tiny amounts split many ways; callers
    /// that need non-negative parts must check.
    ///
    /// # Errors
    ///
    /// - `MoneyError::EmptyAllocation` if `n == 0`
    /// - `MoneyError::Overflow` if the parts cannot be represented
    pub fn allocate(&self, n: usize) -> Result<Vec<Amount>, MoneyError> {
        if n == 0 {
            return Err(MoneyError::EmptyAllocation);
        }

        let base = self
            .0
            .checked_div(Decimal::from(n))
            .ok_or(MoneyError::Overflow)?
            .round_dp(CENT_SCALE);
        let first = base
            .checked_mul(Decimal::from(n - 1))
            .and_then(|rest| self.0.checked_sub(rest))
            .ok_or(MoneyError::Overflow)?;

        let mut parts = Vec::with_capacity(n);
        parts.push(Amount(first));
        parts.extend(std::iter::repeat(Amount(base)).take(n - 1));
        Ok(parts)
    }

    /// Splits the amount by percentages (each 0-100) at cent precision.
    ///
    /// Parts are returned in the same order as the percentages. The last part
    /// gets the remainder to ensure the sum equals the original.
    ///
    /// # Errors
    ///
    /// - `MoneyError::EmptyAllocation` if `percentages` is empty
    /// - `MoneyError::Overflow` if a product or the remainder cannot be represented
    pub fn allocate_by_percentages(&self, percentages: &[Decimal]) -> Result<Vec<Amount>, MoneyError> {
        let Some((_, leading)) = percentages.split_last() else {
            return Err(MoneyError::EmptyAllocation);
        };

        let mut parts = leading
            .iter()
            .map(|percentage| {
                self.0
                    .checked_mul(*percentage)
                    .and_then(|scaled| scaled.checked_div(HUNDRED))
                    .map(Amount::rounded)
                    .ok_or(MoneyError::Overflow)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let remainder = Amount::checked_sum(&parts)
            .and_then(|allocated| self.checked_sub(allocated))
            .ok_or(MoneyError::Overflow)?;
        parts.push(remainder);
        Ok(parts)
    }
}

/// Returns true if `value` has at most two significant fractional digits
pub fn fits_cent_precision(value: Decimal) -> bool {
    value.normalize().scale() <= CENT_SCALE
}

impl fmt::Display for Amount {
    /// Renders without trailing zeros: `250`, `0.34`, `12.5`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Amount)
            .map_err(|_| MoneyError::InvalidAmount(s.to_string()))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

/// Panics on overflow, like `Decimal`; use `checked_add` on untrusted input
impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Panics on overflow, like `Decimal`; use `checked_sub` on untrusted input
impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
