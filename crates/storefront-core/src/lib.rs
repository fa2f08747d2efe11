//! # storefront-core: Pure Business Logic for Storefront
//!
//! Products, discounts, orders and customers, with the price arithmetic and
//! the aggregate statistics computed across every registered order.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  storefront-demo (binary)                       │   │
//! │  │       config ──► build customers/orders ──► print report       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  Customer ──► Order ──► Product / Discount                      │   │
//! │  │                 │                                               │   │
//! │  │                 └──► OrderRegistry (aggregate statistics)       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE PRICE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Decimal money type
//! - [`types`] - Value types ([`Percent`], [`Product`])
//! - [`discount`] - [`Discount`] and its named constructors
//! - [`pricing`] - Pricing strategies (fixed slots vs sequential chain)
//! - [`order`] - [`Order`] and the shared [`OrderHandle`]
//! - [`registry`] - [`OrderRegistry`] for aggregate statistics
//! - [`customer`] - [`Customer`]
//! - [`validation`] - Range checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront_core::{DiscountStrategy, Money, OrderRegistry, Product};
//!
//! let registry = OrderRegistry::new();
//! let order = registry.create_order(DiscountStrategy::fixed_slot());
//!
//! order.add_product(Product::new("Laptop", Money::from_major_minor(1000, 0)).unwrap());
//! order.add_product(Product::new("Mouse", Money::from_major_minor(40, 0)).unwrap());
//! order.set_product_discount("Mouse", Decimal::from(5)).unwrap();
//! order.set_seasonal_discount().unwrap();
//!
//! assert_eq!(order.total(), Money::from_cents(93420));
//! assert_eq!(registry.total_orders(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod customer;
pub mod discount;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod registry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use customer::Customer;
pub use discount::Discount;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderHandle};
pub use pricing::{DiscountStrategy, FixedSlotStrategy, SequentialChainStrategy, StrategyKind};
pub use registry::{OrderRegistry, RegistryStats};
pub use types::{Percent, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency suffix used by every rendered amount.
pub const CURRENCY_SUFFIX: &str = "€";

/// Maximum unit price of a product, in whole currency units.
///
/// Keeps every order and registry sum far inside `Decimal` range.
pub const MAX_PRICE: i64 = 1_000_000_000;

/// Seasonal discount used by the fixed-slot pricing model.
pub const FIXED_SEASONAL_PERCENT: u8 = 10;

/// Known promo codes and their percentages. Lookup is case-insensitive.
pub const PROMO_CODES: &[(&str, u8)] = &[("WELCOME", 10), ("NY2026", 15), ("VIP", 20)];

/// Bulk order tiers as `(minimum subtotal, percent)`, highest first.
///
/// Each lower bound is inclusive.
pub const BULK_ORDER_TIERS: &[(i64, u8)] = &[(300, 12), (150, 7)];
