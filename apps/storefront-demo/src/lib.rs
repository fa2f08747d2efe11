//! # Storefront Demo
//!
//! Builds a small catalog, two customers and their orders, prints every
//! customer with its orders and finishes with the registry statistics.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DemoConfig::load()                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  init_tracing()  (RUST_LOG, else STOREFRONT_LOG, else default filter)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  run()                                                                  │
//! │   ├── fixed-slot scenario        (per-product + seasonal discounts)    │
//! │   ├── sequential-chain scenario  (seasonal → promo → bulk chain)       │
//! │   ├── print customers and orders                                        │
//! │   └── print registry stats (text or JSON)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any validation failure propagates out of `run` and ends the demo.

pub mod config;

use rust_decimal::Decimal;
use std::io::Write;
use storefront_core::{
    CoreResult, Customer, Discount, DiscountStrategy, Money, OrderRegistry, Product,
    RegistryStats,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DemoConfig, OutputFormat};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_core=debug` - Registry and discount events only
/// - Otherwise `fallback_filter` (from `STOREFRONT_LOG`)
///
/// Logs go to stderr so the report on stdout stays clean.
pub fn init_tracing(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the demonstration and writes the report to `out`.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> anyhow::Result<RegistryStats> {
    let registry = OrderRegistry::new();
    let mut alice = Customer::new("Alice");
    let mut bob = Customer::new("Bob");

    if config.pricing_model.includes_fixed_slot() {
        info!("Running fixed-slot scenario");
        fixed_slot_scenario(&registry, &mut alice, &mut bob, out)?;
    }

    if config.pricing_model.includes_sequential_chain() {
        info!("Running sequential-chain scenario");
        sequential_chain_scenario(&registry, &mut alice, &mut bob, out)?;
    }

    for customer in [&alice, &bob] {
        writeln!(out, "{}", customer)?;
        for order in customer.orders() {
            writeln!(out, "  {}", order)?;
        }
    }

    let stats = registry.stats();
    info!(
        total_orders = stats.total_orders,
        total_revenue = %stats.total_revenue,
        "Demo complete"
    );

    writeln!(out)?;
    match config.output {
        OutputFormat::Text => {
            writeln!(out, "All orders stats:")?;
            writeln!(out, "{}", stats)?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
        }
    }

    Ok(stats)
}

fn product(name: &str, cents: i64) -> CoreResult<Product> {
    Ok(Product::new(name, Money::from_cents(cents))?)
}

/// Laptop + Mouse with a Mouse discount and the seasonal slot for Alice,
/// Keyboard + Mouse with two product discounts for Bob.
fn fixed_slot_scenario<W: Write>(
    registry: &OrderRegistry,
    alice: &mut Customer,
    bob: &mut Customer,
    out: &mut W,
) -> anyhow::Result<()> {
    let laptop = product("Laptop", 100_000)?;
    let mouse = product("Mouse", 4_000)?;
    let keyboard = product("Keyboard", 8_000)?;

    writeln!(out, "Compare products by price:")?;
    writeln!(out, "mouse < keyboard: {}", mouse < keyboard)?;
    writeln!(
        out,
        "keyboard == 80€ product: {}",
        keyboard == product("Any", 8_000)?
    )?;
    writeln!(out)?;

    let first = registry.create_order(DiscountStrategy::fixed_slot());
    first.add_product(laptop);
    first.add_product(mouse.clone());
    first.set_product_discount("Mouse", Decimal::from(5))?;
    first.set_seasonal_discount()?;
    alice.add_order(&first)?;

    let second = registry.create_order(DiscountStrategy::fixed_slot());
    second.add_product(keyboard);
    second.add_product(mouse);
    second.set_product_discount("Keyboard", Decimal::from(10))?;
    second.set_product_discount("Mouse", Decimal::from(7))?;
    bob.add_order(&second)?;

    Ok(())
}

/// Laptop + Mouse with a seasonal → promo → bulk chain for Alice,
/// Monitor + Keyboard + Mouse with the VIP promo for Bob.
fn sequential_chain_scenario<W: Write>(
    registry: &OrderRegistry,
    alice: &mut Customer,
    bob: &mut Customer,
    out: &mut W,
) -> anyhow::Result<()> {
    let laptop = product("Laptop", 129_900)?;
    let mouse = product("Mouse", 2_990)?;
    let keyboard = product("Keyboard", 7_950)?;
    let monitor = product("Monitor", 24_900)?;

    writeln!(out, "Compare products by price:")?;
    writeln!(out, "mouse < keyboard: {}", mouse < keyboard)?;
    writeln!(
        out,
        "monitor == other monitor by price: {}",
        monitor == product("Monitor v2", 24_900)?
    )?;
    writeln!(out)?;

    let first = registry.create_order(DiscountStrategy::sequential_chain());
    first.add_product(laptop);
    first.add_product(mouse.clone());
    first.add_discount(Discount::seasonal(Decimal::from(5))?)?;
    first.add_discount(Discount::promo_code("WELCOME"))?;
    first.add_discount(Discount::bulk_order(first.subtotal()))?;
    alice.add_order(&first)?;

    let second = registry.create_order_with_products(
        DiscountStrategy::sequential_chain(),
        [monitor, keyboard, mouse],
    );
    second.add_discount(Discount::promo_code("VIP"))?;
    bob.add_order(&second)?;

    Ok(())
}
