//! Black-box session tests: drive the ledger the way an admin surface would
//! and check the observable snapshot.

use std::time::Duration;

use bodega_core::{DomainError, LedgerId, VariantId, WarehouseId};
use bodega_stock::{AdjustmentInput, InventoryLedger, MovementDirection, TransferInput};

fn on_hand(ledger: &InventoryLedger, warehouse: &str, variant: &str) -> i64 {
    ledger
        .snapshot()
        .inventory
        .iter()
        .filter(|r| r.warehouse_id == WarehouseId::new(warehouse))
        .filter(|r| r.variant_id == VariantId::new(variant))
        .map(|r| r.on_hand)
        .sum()
}

#[test]
fn write_off_then_transfer_session() {
    let mut ledger = InventoryLedger::seeded();

    // Count correction: 20 units of SKU-001 written off at Central.
    ledger
        .apply_adjustment(&AdjustmentInput {
            sku: "SKU-001".to_string(),
            warehouse: "Central".to_string(),
            quantity: -20,
            reason: "merma".to_string(),
        })
        .unwrap();
    assert_eq!(on_hand(&ledger, "wh-1", "var-1"), 30);

    // Move 15 of the remaining 30 to Norte.
    ledger
        .apply_transfer(&TransferInput {
            sku: "SKU-001".to_string(),
            from_warehouse: "Central".to_string(),
            to_warehouse: "Norte".to_string(),
            quantity: 15,
        })
        .unwrap();
    assert_eq!(on_hand(&ledger, "wh-1", "var-1"), 15);
    assert_eq!(on_hand(&ledger, "wh-2", "var-1"), 15);

    let snapshot = ledger.snapshot();
    // Seeded 3 entries + 1 adjustment + 2 transfer entries.
    assert_eq!(snapshot.ledger.len(), 6);
    let ids: Vec<u64> = snapshot.ledger.iter().map(|e| e.ledger_id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let adjustment = &snapshot.ledger[3];
    assert_eq!(adjustment.direction, MovementDirection::Out);
    assert_eq!(adjustment.quantity, 20);
    assert_eq!(adjustment.unit_cost, 10);
    assert!(adjustment.doc_id.starts_with("doc-ajuste-"));

    let (out_leg, in_leg) = (&snapshot.ledger[4], &snapshot.ledger[5]);
    assert_eq!(out_leg.doc_id, in_leg.doc_id);
    assert_eq!(out_leg.created_at, in_leg.created_at);
    assert_eq!(out_leg.signed_quantity() + in_leg.signed_quantity(), 0);

    // Pass-through collections ride along untouched.
    assert_eq!(snapshot.reorder_rules.len(), 1);
    assert_eq!(snapshot.reservations.len(), 1);
}

#[test]
fn failed_operations_leave_no_trace() {
    let mut ledger = InventoryLedger::seeded();
    let before = ledger.snapshot();

    assert_eq!(
        ledger.apply_adjustment(&AdjustmentInput {
            sku: "NOPE".to_string(),
            warehouse: "Central".to_string(),
            quantity: 5,
            reason: "x".to_string(),
        }),
        Err(DomainError::unknown_sku("NOPE"))
    );
    assert_eq!(
        ledger.apply_transfer(&TransferInput {
            sku: "SKU-001".to_string(),
            from_warehouse: "Nowhere".to_string(),
            to_warehouse: "Norte".to_string(),
            quantity: 5,
        }),
        Err(DomainError::unknown_warehouse("Nowhere"))
    );

    assert_eq!(ledger.snapshot(), before);
    assert_eq!(ledger.snapshot().ledger.last().unwrap().ledger_id, LedgerId::new(3));
}

#[tokio::test(start_paused = true)]
async fn fetch_snapshot_resolves_after_the_simulated_delay() {
    let ledger = InventoryLedger::seeded();

    let started = tokio::time::Instant::now();
    let fetched = ledger.fetch_snapshot().await;
    assert!(started.elapsed() >= Duration::from_millis(200));
    assert_eq!(fetched, ledger.snapshot());
}

#[tokio::test]
async fn fetch_delay_is_configurable() {
    let mut ledger = InventoryLedger::seeded().with_fetch_delay(Duration::ZERO);
    ledger
        .apply_adjustment(&AdjustmentInput {
            sku: "SKU-003".to_string(),
            warehouse: "Transito".to_string(),
            quantity: 9,
            reason: "ingreso".to_string(),
        })
        .unwrap();

    let fetched = ledger.fetch_snapshot().await;
    assert_eq!(fetched, ledger.snapshot());
    assert_eq!(
        fetched.inventory.last().unwrap().warehouse_id,
        WarehouseId::new("wh-3")
    );
}
