//! # Discounts
//!
//! An immutable description plus a validated percentage, and the named
//! constructors used by the pricing strategies.
//!
//! ## Named Constructors
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Discount::seasonal(5)        → "Seasonal discount"          5%        │
//! │  Discount::for_product("X",7) → "Product discount: X"        7%        │
//! │  Discount::promo_code("vip")  → "Promo code VIP"            20%        │
//! │  Discount::promo_code("nope") → "Promo code NOPE (0%)"       0%        │
//! │  Discount::bulk_order(299)    → "Bulk order discount"        7%        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Discount::apply_to`] never rounds; rounding belongs to the pricing
//! strategy that combines discounts into an order total.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::money::Money;
use crate::types::Percent;
use crate::validation::{validate_price, ValidationResult};
use crate::{BULK_ORDER_TIERS, PROMO_CODES};

/// Description shared by every seasonal discount.
pub const SEASONAL_DESCRIPTION: &str = "Seasonal discount";

/// Description shared by every bulk order discount.
pub const BULK_ORDER_DESCRIPTION: &str = "Bulk order discount";

/// A named percentage discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discount {
    description: String,
    percent: Percent,
}

impl Discount {
    /// Creates a discount.
    ///
    /// ## Errors
    /// `ValidationError::OutOfRange` if `percent` is outside `[0, 100]`.
    pub fn new(description: impl Into<String>, percent: Decimal) -> ValidationResult<Self> {
        Ok(Discount {
            description: description.into(),
            percent: Percent::new(percent)?,
        })
    }

    pub(crate) fn from_table(description: String, percent: u8) -> Self {
        Discount {
            description,
            percent: Percent::from_whole(percent),
        }
    }

    /// Human-readable description.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The discount percentage.
    #[inline]
    pub fn percent(&self) -> Percent {
        self.percent
    }

    /// Applies `percent` to `price`: `price × (1 − percent / 100)`, unrounded.
    ///
    /// ## Errors
    /// - `MustBeNonNegative` if `price < 0`
    /// - `OutOfRange` if `percent` is outside `[0, 100]`
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::{Discount, Money};
    ///
    /// let price = Discount::apply_to(Money::from_cents(4000), Decimal::from(5)).unwrap();
    /// assert_eq!(price, Money::from_cents(3800));
    /// ```
    pub fn apply_to(price: Money, percent: Decimal) -> ValidationResult<Money> {
        validate_price(price)?;
        let percent = Percent::new(percent)?;
        Ok(price.apply_percent_off(percent))
    }

    /// Applies this discount to `price`, unrounded.
    pub fn apply(&self, price: Money) -> ValidationResult<Money> {
        validate_price(price)?;
        Ok(price.apply_percent_off(self.percent))
    }

    // =========================================================================
    // Named constructors
    // =========================================================================

    /// Order-wide seasonal discount.
    pub fn seasonal(percent: Decimal) -> ValidationResult<Self> {
        Discount::new(SEASONAL_DESCRIPTION, percent)
    }

    /// Discount bound to a single product name.
    pub fn for_product(product_name: &str, percent: Decimal) -> ValidationResult<Self> {
        Discount::new(format!("Product discount: {}", product_name), percent)
    }

    /// Looks up a promo code, ignoring case.
    ///
    /// Unknown codes never fail: they produce a 0% discount whose description
    /// says so.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Discount;
    ///
    /// assert_eq!(Discount::promo_code("vip"), Discount::promo_code("VIP"));
    /// assert!(Discount::promo_code("BOGUS").percent().is_zero());
    /// ```
    pub fn promo_code(code: &str) -> Self {
        let normalized = code.to_uppercase();

        match PROMO_CODES.iter().find(|(known, _)| *known == normalized) {
            Some((_, percent)) => {
                Discount::from_table(format!("Promo code {}", normalized), *percent)
            }
            None => {
                warn!(code = %normalized, "Unrecognized promo code, applying 0%");
                Discount::from_table(format!("Promo code {} (0%)", normalized), 0)
            }
        }
    }

    /// Tiered discount chosen from an order subtotal.
    ///
    /// ## Tiers
    /// - subtotal >= 300 → 12%
    /// - subtotal >= 150 → 7%
    /// - otherwise       → 0%
    pub fn bulk_order(subtotal: Money) -> Self {
        let percent = BULK_ORDER_TIERS
            .iter()
            .find(|(threshold, _)| subtotal.amount() >= Decimal::from(*threshold))
            .map(|(_, percent)| *percent)
            .unwrap_or(0);

        Discount::from_table(BULK_ORDER_DESCRIPTION.to_string(), percent)
    }
}

/// `Seasonal discount (-10%)`
impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (-{})", self.description, self.percent)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_validates_percent() {
        assert!(Discount::new("none", dec!(0)).is_ok());
        assert!(Discount::new("all", dec!(100)).is_ok());
        assert!(matches!(
            Discount::new("too much", dec!(101)),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(Discount::new("negative", dec!(-5)).is_err());
    }

    #[test]
    fn test_apply_to() {
        let price = Discount::apply_to(Money::from_cents(100000), dec!(10)).unwrap();
        assert_eq!(price, Money::from_cents(90000));

        let unrounded = Discount::apply_to(Money::new(dec!(1328.90)), dec!(5)).unwrap();
        assert_eq!(unrounded.amount(), dec!(1262.455));
    }

    #[test]
    fn test_apply_to_rejects_bad_input() {
        assert!(matches!(
            Discount::apply_to(Money::from_cents(-1), dec!(10)),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            Discount::apply_to(Money::from_cents(100), dec!(100.1)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_apply_uses_own_percent() {
        let seasonal = Discount::seasonal(dec!(5)).unwrap();

        assert_eq!(
            seasonal.apply(Money::new(dec!(1328.90))).unwrap().amount(),
            dec!(1262.455)
        );
        assert!(seasonal.apply(Money::zero()).unwrap().is_zero());
        assert_eq!(
            seasonal.apply(Money::from_cents(-1)),
            Err(ValidationError::MustBeNonNegative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_named_descriptions() {
        assert_eq!(
            Discount::seasonal(dec!(10)).unwrap().description(),
            "Seasonal discount"
        );
        assert_eq!(
            Discount::for_product("Mouse", dec!(5)).unwrap().description(),
            "Product discount: Mouse"
        );
        assert!(Discount::for_product("Mouse", dec!(150)).is_err());
    }

    #[test]
    fn test_promo_code_is_case_insensitive() {
        let lower = Discount::promo_code("vip");
        let upper = Discount::promo_code("VIP");
        assert_eq!(lower.percent().value(), dec!(20));
        assert_eq!(lower, upper);
        assert_eq!(upper.description(), "Promo code VIP");

        assert_eq!(Discount::promo_code("Welcome").percent().value(), dec!(10));
        assert_eq!(Discount::promo_code("ny2026").percent().value(), dec!(15));
    }

    #[test]
    fn test_unknown_promo_code_is_zero_percent() {
        let unknown = Discount::promo_code("summer");
        assert!(unknown.percent().is_zero());
        assert_eq!(unknown.description(), "Promo code SUMMER (0%)");
    }

    #[test]
    fn test_bulk_order_tiers() {
        let pct = |amount| Discount::bulk_order(Money::new(amount)).percent().value();

        assert_eq!(pct(dec!(149)), dec!(0));
        assert_eq!(pct(dec!(150)), dec!(7));
        assert_eq!(pct(dec!(299)), dec!(7));
        assert_eq!(pct(dec!(300)), dec!(12));
        assert_eq!(pct(dec!(1328.90)), dec!(12));
        assert_eq!(
            Discount::bulk_order(Money::zero()).description(),
            "Bulk order discount"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Discount::seasonal(dec!(10)).unwrap().to_string(),
            "Seasonal discount (-10%)"
        );
        assert_eq!(
            Discount::promo_code("welcome").to_string(),
            "Promo code WELCOME (-10%)"
        );
        assert_eq!(
            Discount::new("Half", dec!(12.5)).unwrap().to_string(),
            "Half (-12%)"
        );
    }
}
