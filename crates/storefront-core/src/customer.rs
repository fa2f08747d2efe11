//! # Customers
//!
//! A customer is a name plus the orders it owns. Ownership is exclusive: an
//! order is attached to at most one customer, ever.

use std::fmt;
use tracing::debug;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;
use crate::order::OrderHandle;
use crate::validation::{validate_name, ValidationResult};

/// Name used by [`Customer::guest`].
pub const GUEST_NAME: &str = "Guest";

#[derive(Debug, Clone)]
pub struct Customer {
    id: Uuid,
    name: String,
    orders: Vec<OrderHandle>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Customer {
            id: Uuid::new_v4(),
            name: name.into(),
            orders: Vec::new(),
        }
    }

    /// Anonymous customer named "Guest".
    pub fn guest() -> Self {
        Customer::new(GUEST_NAME)
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Changes the name. Blank names are rejected and the old name is kept.
    pub fn rename(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        validate_name("customer name", &name)?;
        self.name = name;
        Ok(())
    }

    /// Attaches `order` to this customer.
    ///
    /// ## Errors
    /// `CoreError::OrderAlreadyOwned` if the order already belongs to any
    /// customer, this one included. The order list is left untouched.
    pub fn add_order(&mut self, order: &OrderHandle) -> CoreResult<()> {
        order.with_order_mut(|o| o.assign_to(self.id))?;
        self.orders.push(order.clone());
        debug!(customer = %self.name, order_id = %order.id(), "Order added to customer");
        Ok(())
    }

    /// Orders in the sequence they were added.
    pub fn orders(&self) -> &[OrderHandle] {
        &self.orders
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Sum of this customer's current order totals, rounded to cents.
    pub fn total_spent(&self) -> Money {
        self.orders
            .iter()
            .map(OrderHandle::total)
            .sum::<Money>()
            .round_to_cents()
    }
}

/// `Customer: Alice (orders: 1)`
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer: {} (orders: {})", self.name, self.orders.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::{DiscountStrategy, OrderRegistry, Product};
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_order_and_display() {
        let registry = OrderRegistry::new();
        let mut alice = Customer::new("Alice");
        assert_eq!(alice.to_string(), "Customer: Alice (orders: 0)");

        let order = registry.create_order(DiscountStrategy::fixed_slot());
        alice.add_order(&order).unwrap();

        assert_eq!(alice.to_string(), "Customer: Alice (orders: 1)");
        assert_eq!(order.customer_id(), Some(alice.id()));
    }

    #[test]
    fn test_order_ownership_is_exclusive() {
        let registry = OrderRegistry::new();
        let mut alice = Customer::new("Alice");
        let mut bob = Customer::new("Bob");
        let order = registry.create_order(DiscountStrategy::sequential_chain());

        alice.add_order(&order).unwrap();

        assert!(matches!(
            bob.add_order(&order),
            Err(CoreError::OrderAlreadyOwned { .. })
        ));
        assert!(matches!(
            alice.add_order(&order),
            Err(CoreError::OrderAlreadyOwned { .. })
        ));
        assert_eq!(alice.order_count(), 1);
        assert_eq!(bob.order_count(), 0);
    }

    #[test]
    fn test_total_spent() {
        let registry = OrderRegistry::new();
        let mut bob = Customer::new("Bob");

        for price in [dec!(10.10), dec!(5.05)] {
            let order = registry.create_order(DiscountStrategy::sequential_chain());
            order.add_product(Product::new("Item", Money::new(price)).unwrap());
            bob.add_order(&order).unwrap();
        }

        assert_eq!(bob.total_spent(), Money::new(dec!(15.15)));
    }

    #[test]
    fn test_guest_and_rename() {
        let mut customer = Customer::guest();
        assert_eq!(customer.name(), "Guest");

        assert!(customer.rename("").is_err());
        assert_eq!(customer.name(), "Guest");

        customer.rename("Carol").unwrap();
        assert_eq!(customer.name(), "Carol");
    }
}
