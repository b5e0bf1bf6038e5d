//! Embedded reference dataset.
//!
//! The simulation boots from this fixture. `seed()` builds a fresh value on
//! every call, so no ledger instance can mutate another's starting point and
//! tests get isolated state for free.

use chrono::{DateTime, Utc};

use bodega_core::{LedgerId, LocationId, VariantId, WarehouseId};

use crate::model::{
    InventoryRow, LedgerEntry, MovementDirection, ReorderRule, Reservation, StockLocation,
    StockSnapshot, Variant, Warehouse,
};

/// Fixed timestamp (2025-01-01T00:00:00Z) so seeded snapshots compare equal
/// across calls.
fn seed_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_735_689_600, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

impl StockSnapshot {
    /// The reference dataset: three warehouses (one without any location),
    /// three variants, opening stock and the receipt entries that produced it.
    pub fn seed() -> Self {
        let at = seed_time();

        let warehouses = vec![
            Warehouse {
                id: WarehouseId::new("wh-1"),
                name: "Central".to_string(),
            },
            Warehouse {
                id: WarehouseId::new("wh-2"),
                name: "Norte".to_string(),
            },
            // No location on purpose: stock here lives under the `None`
            // location bucket.
            Warehouse {
                id: WarehouseId::new("wh-3"),
                name: "Transito".to_string(),
            },
        ];

        let variants = vec![
            Variant {
                id: VariantId::new("var-1"),
                sku: "SKU-001".to_string(),
                cost: 10,
            },
            Variant {
                id: VariantId::new("var-2"),
                sku: "SKU-002".to_string(),
                cost: 25,
            },
            Variant {
                id: VariantId::new("var-3"),
                sku: "SKU-003".to_string(),
                cost: 7,
            },
        ];

        let locations = vec![
            StockLocation {
                id: LocationId::new("loc-1"),
                warehouse_id: WarehouseId::new("wh-1"),
            },
            // Second bin in Central; loc-1 stays the default because it is
            // stored first.
            StockLocation {
                id: LocationId::new("loc-2"),
                warehouse_id: WarehouseId::new("wh-1"),
            },
            StockLocation {
                id: LocationId::new("loc-3"),
                warehouse_id: WarehouseId::new("wh-2"),
            },
        ];

        let inventory = vec![
            InventoryRow {
                warehouse_id: WarehouseId::new("wh-1"),
                location_id: Some(LocationId::new("loc-1")),
                variant_id: VariantId::new("var-1"),
                on_hand: 50,
                reserved: 5,
                updated_at: at,
            },
            InventoryRow {
                warehouse_id: WarehouseId::new("wh-1"),
                location_id: Some(LocationId::new("loc-1")),
                variant_id: VariantId::new("var-2"),
                on_hand: 8,
                reserved: 0,
                updated_at: at,
            },
            InventoryRow {
                warehouse_id: WarehouseId::new("wh-2"),
                location_id: Some(LocationId::new("loc-3")),
                variant_id: VariantId::new("var-2"),
                on_hand: 12,
                reserved: 0,
                updated_at: at,
            },
        ];

        // Opening receipts matching the stock above, so `next_ledger_id`
        // starts past the seeded entries.
        let ledger = vec![
            LedgerEntry {
                ledger_id: LedgerId::new(1),
                doc_id: "doc-ingreso-inicial-1".to_string(),
                unit_cost: 10,
                direction: MovementDirection::In,
                created_at: at,
                warehouse_id: WarehouseId::new("wh-1"),
                location_id: Some(LocationId::new("loc-1")),
                quantity: 50,
                variant_id: VariantId::new("var-1"),
            },
            LedgerEntry {
                ledger_id: LedgerId::new(2),
                doc_id: "doc-ingreso-inicial-2".to_string(),
                unit_cost: 25,
                direction: MovementDirection::In,
                created_at: at,
                warehouse_id: WarehouseId::new("wh-1"),
                location_id: Some(LocationId::new("loc-1")),
                quantity: 8,
                variant_id: VariantId::new("var-2"),
            },
            LedgerEntry {
                ledger_id: LedgerId::new(3),
                doc_id: "doc-ingreso-inicial-3".to_string(),
                unit_cost: 25,
                direction: MovementDirection::In,
                created_at: at,
                warehouse_id: WarehouseId::new("wh-2"),
                location_id: Some(LocationId::new("loc-3")),
                quantity: 12,
                variant_id: VariantId::new("var-2"),
            },
        ];

        let reorder_rules = vec![ReorderRule {
            variant_id: VariantId::new("var-1"),
            warehouse_id: WarehouseId::new("wh-1"),
            min_qty: 10,
            reorder_qty: 40,
        }];

        let reservations = vec![Reservation {
            id: "res-1".to_string(),
            variant_id: VariantId::new("var-1"),
            warehouse_id: WarehouseId::new("wh-1"),
            quantity: 5,
            reference: "SO-1001".to_string(),
        }];

        Self {
            warehouses,
            variants,
            locations,
            inventory,
            ledger,
            reorder_rules,
            reservations,
        }
    }
}
