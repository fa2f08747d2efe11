//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Integer cents fix addition, but a discount chain                       │
//! │    1328.90 × 0.95 × 0.90 × 0.88 = 999.86436                             │
//! │  must stay unrounded until the very end.                                │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    exact sums, exact percentage products, explicit rounding points      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Rounding never happens implicitly. Callers decide when to call
//! [`Money::round_to_cents`], which rounds to 2 decimals with midpoints going
//! away from zero (`0.125 → 0.13`).
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99€
//! let total = price + Money::from_major_minor(5, 0);
//! assert_eq!(total, Money::from_cents(1599));
//! assert_eq!(total.to_string(), "15.99€");
//! ```

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::types::Percent;
use crate::CURRENCY_SUFFIX;

/// Number of decimal places used when rounding and rendering amounts.
pub const CENT_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the store currency.
///
/// ## Design Decisions
/// - **Decimal (signed)**: exact base-10 values; the sign is kept so that
///   validation can reject negative prices explicitly
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Equality is numeric**: `10.5` and `10.50` are the same amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Wraps a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(2990);
    /// assert_eq!(price.to_string(), "29.90€");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, CENT_SCALE))
    }

    /// Creates a Money value from major and minor units (euros and cents).
    ///
    /// For negative amounts only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -5.50, not -4.50.
    pub fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money::from_cents(major * 100 - minor)
        } else {
            Money::from_cents(major * 100 + minor)
        }
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount, unrounded.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rounds to whole cents, midpoints away from zero. The result always
    /// carries exactly two decimal places.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::money::Money;
    ///
    /// let raw = Money::new(Decimal::new(99986436, 5)); // 999.86436
    /// assert_eq!(raw.round_to_cents(), Money::from_cents(99986));
    /// ```
    pub fn round_to_cents(&self) -> Money {
        let mut rounded = self
            .0
            .round_dp_with_strategy(CENT_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(CENT_SCALE);
        Money(rounded)
    }

    /// Takes a percentage off this amount without rounding.
    ///
    /// `amount × (1 − percent / 100)`
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::{money::Money, types::Percent};
    ///
    /// let ten_off = Percent::new(Decimal::from(10)).unwrap();
    /// let discounted = Money::from_cents(10000).apply_percent_off(ten_off);
    /// assert_eq!(discounted, Money::from_cents(9000));
    /// ```
    pub fn apply_percent_off(&self, percent: Percent) -> Money {
        Money(self.0 * (Decimal::ONE - percent.fraction()))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount rounded to cents with the currency suffix: `1040.00€`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.round_to_cents().0, CURRENCY_SUFFIX)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents_and_major_minor() {
        assert_eq!(Money::from_cents(1099).amount(), dec!(10.99));
        assert_eq!(Money::from_major_minor(10, 99), Money::from_cents(1099));
        assert_eq!(Money::from_major_minor(-5, 50).amount(), dec!(-5.50));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(104000).to_string(), "1040.00€");
        assert_eq!(Money::from_cents(500).to_string(), "5.00€");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50€");
        assert_eq!(Money::zero().to_string(), "0.00€");
        assert_eq!(Money::new(dec!(999.86436)).to_string(), "999.86€");
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(Money::new(dec!(934.2)), Money::from_cents(93420));
    }

    #[test]
    fn test_round_to_cents_midpoint_away_from_zero() {
        assert_eq!(Money::new(dec!(0.125)).round_to_cents().amount(), dec!(0.13));
        assert_eq!(Money::new(dec!(0.124)).round_to_cents().amount(), dec!(0.12));
        assert_eq!(Money::new(dec!(-0.125)).round_to_cents().amount(), dec!(-0.13));
    }

    #[test]
    fn test_apply_percent_off_is_unrounded() {
        let five = Percent::new(dec!(5)).unwrap();
        let result = Money::new(dec!(0.33)).apply_percent_off(five);
        assert_eq!(result.amount(), dec!(0.3135));
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(129900), Money::from_cents(2990)];
        let total: Money = prices.iter().sum();
        assert_eq!(total, Money::from_cents(132890));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::zero().is_negative());
        assert!(Money::zero().is_zero());
        assert!(!Money::from_cents(1).is_negative());
    }
}
