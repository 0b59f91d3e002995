//! Operational entry point
//!
//! Opens (or creates) the store, seeds the demo fixture on first run and
//! logs a status summary. Useful as a smoke check of the persistence layer.

use atkins_pos::{Config, Inventory, PosStore, init_logger, reports, seed};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_logger(&config.log_level)?;

    std::fs::create_dir_all(&config.data_dir)?;
    let store = PosStore::open(config.store_path())?;
    seed::initialize_demo_data(&store)?;

    let settings = store.settings()?;
    let inventory = Inventory::new(store.clone())?;
    let transactions = store.transactions()?;
    let summary = reports::sales_summary(&transactions);

    tracing::info!(
        store_name = %settings.store_name,
        products = inventory.products().len(),
        low_stock = inventory.low_stock().len(),
        transactions = summary.transaction_count,
        total_revenue = %summary.total_revenue,
        "Store ready"
    );

    for product in inventory.low_stock() {
        tracing::warn!(
            product_id = %product.id,
            name = %product.name,
            stock = product.stock,
            threshold = product.min_stock_threshold,
            "Low stock"
        );
    }

    Ok(())
}
