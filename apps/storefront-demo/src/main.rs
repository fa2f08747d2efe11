//! # Storefront Demo Binary
//!
//! ```bash
//! cargo run -p storefront-demo
//! STOREFRONT_PRICING_MODEL=fixed-slot STOREFRONT_OUTPUT=json cargo run -p storefront-demo
//! ```

use std::io;

use storefront_demo::config::DemoConfig;
use storefront_demo::{init_tracing, run};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::load()?;
    init_tracing(&config.log_filter);

    info!(
        pricing_model = ?config.pricing_model,
        output = ?config.output,
        "Starting Storefront demo"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;

    Ok(())
}
