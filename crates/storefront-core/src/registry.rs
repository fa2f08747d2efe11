//! # Order Registry
//!
//! Explicit collection of every order created through it, used for aggregate
//! statistics. There is no process-wide registry: create one per context and
//! pass it where orders are created. Each test gets its own instance.
//!
//! ## Lock Ordering
//! ```text
//! total_revenue()
//!      │
//!      ├── lock registry ──► clone handles ──► unlock registry
//!      │
//!      └── for each handle: lock order ──► total() ──► unlock order
//! ```
//! The registry lock is never held while an order lock is taken, so callers
//! may hold an order lock and still create new orders. Querying statistics
//! from inside `OrderHandle::with_order*` deadlocks on that order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::money::Money;
use crate::order::{Order, OrderHandle};
use crate::pricing::DiscountStrategy;
use crate::types::Product;

/// Aggregate numbers across a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_orders: usize,
    pub total_revenue: Money,
}

impl fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total orders: {}\nTotal revenue: {}",
            self.total_orders, self.total_revenue
        )
    }
}

/// Append-only list of registered orders. Never pruned.
#[derive(Debug, Default)]
pub struct OrderRegistry {
    orders: Mutex<Vec<OrderHandle>>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<OrderHandle>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates an empty order and registers it.
    pub fn create_order(&self, strategy: DiscountStrategy) -> OrderHandle {
        self.create_order_with_products(strategy, Vec::new())
    }

    /// Creates an order pre-filled with `products` and registers it.
    pub fn create_order_with_products(
        &self,
        strategy: DiscountStrategy,
        products: impl IntoIterator<Item = Product>,
    ) -> OrderHandle {
        let order = Order::new(strategy, products.into_iter().collect());
        let kind = order.strategy().kind();
        let handle = OrderHandle::new(order);

        let mut orders = self.lock();
        orders.push(handle.clone());
        debug!(
            order_id = %handle.id(),
            strategy = %kind,
            registered = orders.len(),
            "Order registered"
        );

        handle
    }

    /// Number of orders ever created through this registry.
    pub fn total_orders(&self) -> usize {
        self.lock().len()
    }

    /// Sum of every order's current total, rounded to cents.
    pub fn total_revenue(&self) -> Money {
        self.orders()
            .iter()
            .map(OrderHandle::total)
            .sum::<Money>()
            .round_to_cents()
    }

    /// Same as [`OrderRegistry::total_revenue`].
    pub fn total_sum(&self) -> Money {
        self.total_revenue()
    }

    /// Snapshot of the registered handles, in creation order.
    pub fn orders(&self) -> Vec<OrderHandle> {
        self.lock().clone()
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            total_orders: self.total_orders(),
            total_revenue: self.total_revenue(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::Discount;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::thread;

    fn product(name: &str, price: Decimal) -> Product {
        Product::new(name, Money::new(price)).unwrap()
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = OrderRegistry::new();
        assert_eq!(registry.total_orders(), 0);
        assert!(registry.total_revenue().is_zero());
    }

    #[test]
    fn test_every_order_is_registered() {
        let registry = OrderRegistry::new();
        registry.create_order(DiscountStrategy::fixed_slot());
        registry.create_order(DiscountStrategy::sequential_chain());
        registry.create_order_with_products(
            DiscountStrategy::sequential_chain(),
            vec![product("Monitor", dec!(249))],
        );

        assert_eq!(registry.total_orders(), 3);
    }

    #[test]
    fn test_registries_are_isolated() {
        let first = OrderRegistry::new();
        let second = OrderRegistry::new();
        first.create_order(DiscountStrategy::fixed_slot());

        assert_eq!(first.total_orders(), 1);
        assert_eq!(second.total_orders(), 0);
    }

    #[test]
    fn test_revenue_reflects_changes_after_creation() {
        let registry = OrderRegistry::new();
        let order = registry.create_order(DiscountStrategy::fixed_slot());
        order.add_product(product("Laptop", dec!(1000)));
        order.add_product(product("Mouse", dec!(40)));
        assert_eq!(registry.total_revenue(), Money::new(dec!(1040)));

        order.set_product_discount("Mouse", dec!(5)).unwrap();
        order.set_seasonal_discount().unwrap();
        assert_eq!(registry.total_revenue(), Money::new(dec!(934.20)));
    }

    #[test]
    fn test_revenue_mixes_strategies() {
        let registry = OrderRegistry::new();

        let fixed = registry.create_order(DiscountStrategy::fixed_slot());
        fixed.add_product(product("Keyboard", dec!(80)));
        fixed.add_product(product("Mouse", dec!(40)));
        fixed.set_product_discount("Keyboard", dec!(10)).unwrap();
        fixed.set_product_discount("Mouse", dec!(7)).unwrap();

        let chain = registry.create_order_with_products(
            DiscountStrategy::sequential_chain(),
            vec![
                product("Monitor", dec!(249.00)),
                product("Keyboard", dec!(79.50)),
                product("Mouse", dec!(29.90)),
            ],
        );
        chain.add_discount(Discount::promo_code("VIP")).unwrap();

        assert_eq!(fixed.total(), Money::new(dec!(109.20)));
        assert_eq!(chain.total(), Money::new(dec!(286.72)));
        assert_eq!(
            registry.stats(),
            RegistryStats {
                total_orders: 2,
                total_revenue: Money::new(dec!(395.92)),
            }
        );
        assert_eq!(registry.total_sum(), registry.total_revenue());
    }

    #[test]
    fn test_orders_snapshot_keeps_creation_order() {
        let registry = OrderRegistry::new();
        let first = registry.create_order(DiscountStrategy::fixed_slot());
        let second = registry.create_order(DiscountStrategy::sequential_chain());

        let orders = registry.orders();
        assert!(orders[0].ptr_eq(&first));
        assert!(orders[1].ptr_eq(&second));
    }

    #[test]
    fn test_concurrent_registration() {
        let registry = Arc::new(OrderRegistry::new());

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..25 {
                        let order = registry.create_order(DiscountStrategy::sequential_chain());
                        order.add_product(product("Pen", dec!(1)));
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(registry.total_orders(), 100);
        assert_eq!(registry.total_revenue(), Money::new(dec!(100)));
    }

    #[test]
    fn test_stats_serialize() {
        let stats = RegistryStats {
            total_orders: 2,
            total_revenue: Money::from_cents(104340),
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["total_orders"].as_u64(), Some(2));
        assert_eq!(json["total_revenue"].as_str(), Some("1043.40"));
    }
}
