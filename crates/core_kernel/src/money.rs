//! Money and rate types with precise decimal arithmetic
//!
//! Claim amounts are USD throughout the system, so `Money` wraps a bare
//! `Decimal` rather than carrying a currency tag. Decision scoring must be
//! reproducible bit-for-bit, which rules out binary floating point for any
//! monetary or rate arithmetic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// A USD monetary amount.
///
/// Arithmetic is exact; rounding to cents happens only when a value is
/// stored into a report. Amounts may go negative mid-calculation (an
/// insurer share can be negative when a claim falls below the deductible),
/// so no sign invariant is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a new amount. No rounding is applied.
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates an amount from whole dollars.
    pub fn from_dollars(dollars: i64) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns `max(0, self - other)`.
    ///
    /// This is the deductible carve-out operation: the portion of a cost
    /// above a threshold, never negative.
    pub fn excess_over(&self, other: Money) -> Money {
        if self.0 > other.0 {
            Money(self.0 - other.0)
        } else {
            Money::ZERO
        }
    }

    /// Rounds to cents using banker's rounding, for reporting.
    pub fn round_cents(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointNearestEven),
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// A fractional rate, such as a coinsurance share.
///
/// Stored as a decimal fraction (0.20 for 20%). Whether a rate is a valid
/// fraction in [0, 1] is a rule-table concern, validated at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rate(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Rate {
    /// Creates a rate from a decimal fraction.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a rate from a percentage (20.0 for 20%).
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self(percentage / dec!(100))
    }

    /// Returns the rate as a decimal fraction.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Returns true if the rate lies in [0, 1].
    pub fn is_fraction(&self) -> bool {
        self.0 >= Decimal::ZERO && self.0 <= Decimal::ONE
    }

    /// Applies this rate to an amount.
    pub fn apply(&self, money: Money) -> Money {
        Money::new(money.amount() * self.0)
    }
}

impl Default for Rate {
    fn default() -> Self {
        Self(Decimal::ZERO)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * dec!(100)).round_dp(4))
    }
}
