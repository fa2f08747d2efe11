//! # Pricing Strategies
//!
//! How an order turns its products and discounts into a total.
//!
//! ## Two Models
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FixedSlot                         SequentialChain                      │
//! │  ─────────                         ───────────────                      │
//! │  per-product map + seasonal slot   ordered list of discounts           │
//! │                                                                         │
//! │  for each product:                 subtotal (unrounded)                 │
//! │    price − product discount          × (1 − d1) × (1 − d2) × ...        │
//! │    round(2)                          round(2) once, at the end          │
//! │  sum, round(2)                                                          │
//! │  − seasonal, round(2)                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two models round at different points and therefore produce different
//! numbers for the same inputs. Both are kept exactly as they are.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::discount::{Discount, SEASONAL_DESCRIPTION};
use crate::money::Money;
use crate::types::Product;
use crate::validation::ValidationResult;
use crate::FIXED_SEASONAL_PERCENT;

// =============================================================================
// Strategy Kind
// =============================================================================

/// Which pricing model an order uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Per-product discounts plus one seasonal slot.
    FixedSlot,
    /// Ordered discounts applied one after another.
    SequentialChain,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::FixedSlot => f.write_str("fixed-slot"),
            StrategyKind::SequentialChain => f.write_str("sequential-chain"),
        }
    }
}

// =============================================================================
// Fixed Slot
// =============================================================================

/// Per-product discounts keyed by product name plus an optional seasonal
/// discount on the whole order.
///
/// Product discounts keep the order in which each name was first set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FixedSlotStrategy {
    product_discounts: Vec<(String, Discount)>,
    seasonal: Option<Discount>,
}

impl FixedSlotStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a discount for every product called `product_name`.
    ///
    /// A later call for the same name replaces the earlier discount. The
    /// product does not have to be in the order yet.
    pub fn set_product_discount(
        &mut self,
        product_name: &str,
        percent: Decimal,
    ) -> ValidationResult<()> {
        let discount = Discount::for_product(product_name, percent)?;
        match self.slot_mut(product_name) {
            Some(existing) => *existing = discount,
            None => self.product_discounts.push((product_name.to_string(), discount)),
        }
        Ok(())
    }

    /// Fills the seasonal slot with the fixed 10% seasonal discount.
    pub fn set_seasonal_discount(&mut self) {
        self.seasonal = Some(Discount::from_table(
            SEASONAL_DESCRIPTION.to_string(),
            FIXED_SEASONAL_PERCENT,
        ));
    }

    pub fn product_discount(&self, product_name: &str) -> Option<&Discount> {
        self.product_discounts
            .iter()
            .find(|(name, _)| name.as_str() == product_name)
            .map(|(_, discount)| discount)
    }

    fn slot_mut(&mut self, product_name: &str) -> Option<&mut Discount> {
        self.product_discounts
            .iter_mut()
            .find(|(name, _)| name.as_str() == product_name)
            .map(|(_, discount)| discount)
    }

    /// Product discounts in the order they were first set.
    pub fn product_discounts(&self) -> impl Iterator<Item = (&str, &Discount)> {
        self.product_discounts
            .iter()
            .map(|(name, discount)| (name.as_str(), discount))
    }

    pub fn seasonal_discount(&self) -> Option<&Discount> {
        self.seasonal.as_ref()
    }

    /// Sum of product prices, rounded to cents.
    pub fn subtotal(&self, products: &[Product]) -> Money {
        products
            .iter()
            .map(Product::price)
            .sum::<Money>()
            .round_to_cents()
    }

    /// Per-product pass, round, then seasonal pass, round.
    pub fn total(&self, products: &[Product]) -> Money {
        let after_products = products
            .iter()
            .map(|product| match self.product_discount(product.name()) {
                Some(discount) => product
                    .price()
                    .apply_percent_off(discount.percent())
                    .round_to_cents(),
                None => product.price(),
            })
            .sum::<Money>()
            .round_to_cents();

        match &self.seasonal {
            Some(seasonal) => after_products
                .apply_percent_off(seasonal.percent())
                .round_to_cents(),
            None => after_products,
        }
    }
}

/// `product discounts: Mouse(-5%) | seasonal: Seasonal discount (-10%)`
impl fmt::Display for FixedSlotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let product_discounts = if self.product_discounts.is_empty() {
            "none".to_string()
        } else {
            self.product_discounts
                .iter()
                .map(|(name, discount)| format!("{}(-{})", name, discount.percent()))
                .collect::<Vec<_>>()
                .join(", ")
        };

        write!(f, "product discounts: {} | seasonal: ", product_discounts)?;
        match &self.seasonal {
            Some(seasonal) => write!(f, "{}", seasonal),
            None => f.write_str("none"),
        }
    }
}

// =============================================================================
// Sequential Chain
// =============================================================================

/// Discounts applied in insertion order, each to the running result.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SequentialChainStrategy {
    discounts: Vec<Discount>,
}

impl SequentialChainStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_discount(&mut self, discount: Discount) {
        self.discounts.push(discount);
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Raw sum of product prices.
    pub fn subtotal(&self, products: &[Product]) -> Money {
        products.iter().map(Product::price).sum()
    }

    /// Chains every discount over the raw subtotal and rounds once.
    pub fn total(&self, products: &[Product]) -> Money {
        self.discounts
            .iter()
            .fold(self.subtotal(products), |running, discount| {
                running.apply_percent_off(discount.percent())
            })
            .round_to_cents()
    }
}

/// `discounts: Seasonal discount (-5%), Promo code VIP (-20%)`
impl fmt::Display for SequentialChainStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.discounts.is_empty() {
            return f.write_str("no discounts");
        }

        let rendered = self
            .discounts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "discounts: {}", rendered)
    }
}

// =============================================================================
// Discount Strategy
// =============================================================================

/// Pricing model selected per order at construction time.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DiscountStrategy {
    FixedSlot(FixedSlotStrategy),
    SequentialChain(SequentialChainStrategy),
}

impl DiscountStrategy {
    /// Empty fixed-slot strategy.
    pub fn fixed_slot() -> Self {
        DiscountStrategy::FixedSlot(FixedSlotStrategy::new())
    }

    /// Empty sequential-chain strategy.
    pub fn sequential_chain() -> Self {
        DiscountStrategy::SequentialChain(SequentialChainStrategy::new())
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            DiscountStrategy::FixedSlot(_) => StrategyKind::FixedSlot,
            DiscountStrategy::SequentialChain(_) => StrategyKind::SequentialChain,
        }
    }

    pub fn subtotal(&self, products: &[Product]) -> Money {
        match self {
            DiscountStrategy::FixedSlot(strategy) => strategy.subtotal(products),
            DiscountStrategy::SequentialChain(strategy) => strategy.subtotal(products),
        }
    }

    pub fn total(&self, products: &[Product]) -> Money {
        match self {
            DiscountStrategy::FixedSlot(strategy) => strategy.total(products),
            DiscountStrategy::SequentialChain(strategy) => strategy.total(products),
        }
    }
}

impl Default for DiscountStrategy {
    fn default() -> Self {
        DiscountStrategy::fixed_slot()
    }
}

impl fmt::Display for DiscountStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountStrategy::FixedSlot(strategy) => fmt::Display::fmt(strategy, f),
            DiscountStrategy::SequentialChain(strategy) => fmt::Display::fmt(strategy, f),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
