//! Demo binary: seeds a ledger, applies a sample movement session and prints
//! the resulting snapshot as JSON on stdout (logs go to stderr).

use std::time::Duration;

use anyhow::Context;

use bodega_stock::{AdjustmentInput, InventoryLedger, TransferInput};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bodega_observability::init();

    let fetch_delay = std::env::var("BODEGA_FETCH_DELAY_MS")
        .ok()
        .and_then(|raw| match raw.parse::<u64>() {
            Ok(ms) => Some(Duration::from_millis(ms)),
            Err(_) => {
                tracing::warn!(raw = %raw, "ignoring unparsable BODEGA_FETCH_DELAY_MS");
                None
            }
        });

    let mut ledger = InventoryLedger::seeded();
    if let Some(delay) = fetch_delay {
        ledger = ledger.with_fetch_delay(delay);
    }

    // A small representative session: a write-off and a rebalancing transfer.
    ledger
        .apply_adjustment(&AdjustmentInput {
            sku: "SKU-001".to_string(),
            warehouse: "Central".to_string(),
            quantity: -20,
            reason: "merma".to_string(),
        })
        .context("sample adjustment failed")?;
    ledger
        .apply_transfer(&TransferInput {
            sku: "SKU-001".to_string(),
            from_warehouse: "Central".to_string(),
            to_warehouse: "Norte".to_string(),
            quantity: 15,
        })
        .context("sample transfer failed")?;

    let snapshot = ledger.fetch_snapshot().await;
    tracing::info!(
        inventory_rows = snapshot.inventory.len(),
        ledger_entries = snapshot.ledger.len(),
        "session complete"
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
