//! # Domain Types
//!
//! Immutable value types used throughout storefront-core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Value Types                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Product      │   │    Percent      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  name           │   │  Decimal        │                             │
//! │  │  price (>= 0)   │   │  0 ..= 100      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Both are validated once, at construction, and never mutated.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::money::Money;
use crate::validation::{validate_name, validate_percent, validate_price, ValidationResult};

// =============================================================================
// Percent
// =============================================================================

/// A discount percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a validated percentage.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use storefront_core::types::Percent;
    ///
    /// assert!(Percent::new(Decimal::from(20)).is_ok());
    /// assert!(Percent::new(Decimal::from(101)).is_err());
    /// ```
    pub fn new(value: Decimal) -> ValidationResult<Self> {
        validate_percent(value)?;
        Ok(Percent(value))
    }

    /// Builds a percentage from a constant table entry.
    pub(crate) fn from_whole(value: u8) -> Self {
        debug_assert!(value <= 100, "percent table entry out of range");
        Percent(Decimal::from(value))
    }

    /// Zero percent.
    #[inline]
    pub const fn zero() -> Self {
        Percent(Decimal::ZERO)
    }

    /// Returns the percentage, e.g. `12` for 12%.
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the percentage as a fraction, e.g. `0.12` for 12%.
    #[inline]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Checks if this is a 0% discount.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Whole-percent rendering: `10%`. Halves go to the even neighbour.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self
            .0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .normalize();
        write!(f, "{}%", whole)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// ## Identity
/// Products compare by price and nothing else: `Product("A", 50)` equals
/// `Product("B", 50)`. Comparison against anything that is not a `Product`
/// does not compile.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    name: String,
    price: Money,
}

impl Product {
    /// Creates a product.
    ///
    /// ## Errors
    /// - `ValidationError::MustBeNonNegative` if `price < 0`
    /// - `ValidationError::OutOfRange` if `price > MAX_PRICE`
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let mouse = Product::new("Mouse", Money::from_cents(4000)).unwrap();
    /// assert_eq!(mouse.to_string(), "Mouse (40.00€)");
    /// assert!(Product::new("Broken", Money::from_cents(-1)).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> ValidationResult<Self> {
        validate_price(price)?;
        Ok(Product {
            name: name.into(),
            price,
        })
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns a copy with a different price, validated like [`Product::new`].
    pub fn with_price(&self, price: Money) -> ValidationResult<Self> {
        Product::new(self.name.clone(), price)
    }

    /// Returns a copy with a different name.
    ///
    /// ## Errors
    /// `ValidationError::Required` if the name is blank.
    pub fn with_name(&self, name: impl Into<String>) -> ValidationResult<Self> {
        let name = name.into();
        validate_name("product name", &name)?;
        Ok(Product {
            name,
            price: self.price,
        })
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price
    }
}

impl Eq for Product {}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Product {
    fn cmp(&self, other: &Self) -> Ordering {
        self.price.cmp(&other.price)
    }
}

/// `Laptop (1000.00€)`
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
