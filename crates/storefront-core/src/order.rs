//! # Orders
//!
//! An order is a list of products priced through one [`DiscountStrategy`].
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  OrderRegistry::create_order(strategy)                                  │
//! │       │                                                                 │
//! │       ├──► Order registered (id, created_at)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderHandle ──► add_product / set_*_discount / add_discount           │
//! │       │                                                                 │
//! │       ├──► Customer::add_order (exclusive owner)                       │
//! │       │                                                                 │
//! │       └──► subtotal() / total()  recomputed on every call              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders can only be created through an [`OrderRegistry`](crate::OrderRegistry),
//! so every order is counted by exactly one registry.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;
use uuid::Uuid;

use crate::discount::Discount;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{DiscountStrategy, StrategyKind};
use crate::types::Product;

// =============================================================================
// Order
// =============================================================================

/// A customer order.
///
/// ## Invariants
/// - `subtotal()` and `total()` are pure functions of the current products
///   and discounts; nothing is cached
/// - `customer_id` is set at most once
#[derive(Debug, Serialize)]
pub struct Order {
    id: Uuid,
    created_at: DateTime<Utc>,
    products: Vec<Product>,
    strategy: DiscountStrategy,
    customer_id: Option<Uuid>,
}

impl Order {
    pub(crate) fn new(strategy: DiscountStrategy, products: Vec<Product>) -> Self {
        Order {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            products,
            strategy,
            customer_id: None,
        }
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[inline]
    pub fn strategy(&self) -> &DiscountStrategy {
        &self.strategy
    }

    /// The customer this order belongs to, if any.
    #[inline]
    pub fn customer_id(&self) -> Option<Uuid> {
        self.customer_id
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Sets (or replaces) the discount for every product called
    /// `product_name`. Fixed-slot orders only.
    pub fn set_product_discount(&mut self, product_name: &str, percent: Decimal) -> CoreResult<()> {
        match &mut self.strategy {
            DiscountStrategy::FixedSlot(strategy) => {
                strategy.set_product_discount(product_name, percent)?;
                debug!(order_id = %self.id, product = product_name, %percent, "Product discount set");
                Ok(())
            }
            other => Err(unsupported("set_product_discount", other.kind())),
        }
    }

    /// Fills the seasonal slot (10%). Fixed-slot orders only.
    pub fn set_seasonal_discount(&mut self) -> CoreResult<()> {
        match &mut self.strategy {
            DiscountStrategy::FixedSlot(strategy) => {
                strategy.set_seasonal_discount();
                debug!(order_id = %self.id, "Seasonal discount set");
                Ok(())
            }
            other => Err(unsupported("set_seasonal_discount", other.kind())),
        }
    }

    /// Appends a discount to the chain. Sequential-chain orders only.
    pub fn add_discount(&mut self, discount: Discount) -> CoreResult<()> {
        match &mut self.strategy {
            DiscountStrategy::SequentialChain(strategy) => {
                debug!(order_id = %self.id, discount = %discount, "Discount added");
                strategy.add_discount(discount);
                Ok(())
            }
            other => Err(unsupported("add_discount", other.kind())),
        }
    }

    pub fn subtotal(&self) -> Money {
        self.strategy.subtotal(&self.products)
    }

    pub fn total(&self) -> Money {
        self.strategy.total(&self.products)
    }

    pub(crate) fn assign_to(&mut self, customer_id: Uuid) -> CoreResult<()> {
        if let Some(owner) = self.customer_id {
            return Err(CoreError::OrderAlreadyOwned {
                order_id: self.id,
                customer_id: owner,
            });
        }

        self.customer_id = Some(customer_id);
        Ok(())
    }
}

fn unsupported(operation: &'static str, strategy: StrategyKind) -> CoreError {
    CoreError::UnsupportedOperation {
        operation,
        strategy,
    }
}

/// `Order: [Laptop, Mouse] | <discounts> | subtotal: 1040.00€ -> total: 934.20€`
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = if self.products.is_empty() {
            "—".to_string()
        } else {
            self.products
                .iter()
                .map(Product::name)
                .collect::<Vec<_>>()
                .join(", ")
        };

        write!(
            f,
            "Order: [{}] | {} | subtotal: {} -> total: {}",
            items,
            self.strategy,
            self.subtotal(),
            self.total()
        )
    }
}

// =============================================================================
// Order Handle
// =============================================================================

/// Shared handle to a registered order.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Order>>` because:
/// - `Arc`: the registry and the owning customer both refer to the order
/// - `Mutex`: only one caller mutates the order at a time
///
/// Do not call back into the same handle from inside `with_order` /
/// `with_order_mut`; the lock is not reentrant.
#[derive(Debug, Clone)]
pub struct OrderHandle {
    id: Uuid,
    inner: Arc<Mutex<Order>>,
}

impl OrderHandle {
    pub(crate) fn new(order: Order) -> Self {
        OrderHandle {
            id: order.id,
            inner: Arc::new(Mutex::new(order)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Order> {
        // Order has no multi-step invariants a panic could break mid-way.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Executes a function with read access to the order.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let names = handle.with_order(|order| order.products().len());
    /// ```
    pub fn with_order<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Order) -> R,
    {
        let order = self.lock();
        f(&*order)
    }

    /// Executes a function with write access to the order.
    pub fn with_order_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Order) -> R,
    {
        let mut order = self.lock();
        f(&mut *order)
    }

    /// True when both handles point at the same order.
    pub fn ptr_eq(&self, other: &OrderHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn add_product(&self, product: Product) {
        self.with_order_mut(|order| order.add_product(product));
    }

    pub fn set_product_discount(&self, product_name: &str, percent: Decimal) -> CoreResult<()> {
        self.with_order_mut(|order| order.set_product_discount(product_name, percent))
    }

    pub fn set_seasonal_discount(&self) -> CoreResult<()> {
        self.with_order_mut(Order::set_seasonal_discount)
    }

    pub fn add_discount(&self, discount: Discount) -> CoreResult<()> {
        self.with_order_mut(|order| order.add_discount(discount))
    }

    pub fn subtotal(&self) -> Money {
        self.with_order(Order::subtotal)
    }

    pub fn total(&self) -> Money {
        self.with_order(Order::total)
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.with_order(|order| order.strategy().kind())
    }

    pub fn customer_id(&self) -> Option<Uuid> {
        self.with_order(Order::customer_id)
    }
}

impl fmt::Display for OrderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_order(|order| write!(f, "{}", order))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
