use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bodega_core::{LedgerId, LocationId, VariantId, WarehouseId};

/// Warehouse reference data.
///
/// Resolved by exact id first, then case-insensitive name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub name: String,
}

/// Product variant reference data.
///
/// `cost` is expressed in the smallest currency unit and is stamped onto
/// ledger entries as `unit_cost` at movement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub sku: String,
    pub cost: i64,
}

/// Storage location (bin) within a warehouse.
///
/// The first location stored for a warehouse is its default location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLocation {
    pub id: LocationId,
    pub warehouse_id: WarehouseId,
}

/// Current stock for one `(warehouse, location, variant)` key.
///
/// `location_id` is `None` for warehouses without any location; that bucket
/// is a distinct key, not an alias of some located row. Rows are created
/// lazily (zeroed) the first time a mutation path references their key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub warehouse_id: WarehouseId,
    pub location_id: Option<LocationId>,
    pub variant_id: VariantId,
    /// Physical quantity on hand. Never negative.
    pub on_hand: i64,
    /// Earmarked quantity. Carried as data; the movement operations never
    /// touch it.
    pub reserved: i64,
    pub updated_at: DateTime<Utc>,
}

/// Direction of a ledger movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementDirection {
    In,
    Out,
}

/// One immutable movement record in the append-only ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// 1-based, strictly increasing within a session.
    pub ledger_id: LedgerId,
    /// Document reference shared by all entries of one operation
    /// (`doc-ajuste-<epoch millis>` / `doc-transfer-<epoch millis>`).
    pub doc_id: String,
    pub unit_cost: i64,
    pub direction: MovementDirection,
    pub created_at: DateTime<Utc>,
    pub warehouse_id: WarehouseId,
    pub location_id: Option<LocationId>,
    /// Movement magnitude; always positive, direction carries the sign.
    pub quantity: i64,
    pub variant_id: VariantId,
}

impl LedgerEntry {
    /// Quantity with the direction folded in: IN positive, OUT negative.
    pub fn signed_quantity(&self) -> i64 {
        match self.direction {
            MovementDirection::In => self.quantity,
            MovementDirection::Out => -self.quantity,
        }
    }
}

/// Replenishment rule. Pass-through data: rides in the snapshot untouched by
/// the movement operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRule {
    pub variant_id: VariantId,
    pub warehouse_id: WarehouseId,
    pub min_qty: i64,
    pub reorder_qty: i64,
}

/// Stock reservation against an order. Pass-through data, like [`ReorderRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub variant_id: VariantId,
    pub warehouse_id: WarehouseId,
    pub quantity: i64,
    pub reference: String,
}

/// The whole in-memory dataset.
///
/// `Clone` is the deep copy handed out by the snapshot accessors, so holders
/// of a snapshot can never reach the live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub warehouses: Vec<Warehouse>,
    pub variants: Vec<Variant>,
    pub locations: Vec<StockLocation>,
    pub inventory: Vec<InventoryRow>,
    pub ledger: Vec<LedgerEntry>,
    pub reorder_rules: Vec<ReorderRule>,
    pub reservations: Vec<Reservation>,
}

/// Input for a single-warehouse stock correction.
///
/// `quantity` is signed: positive receives stock (IN), negative writes it
/// off (OUT). `sku` and `warehouse` are human-entered identifiers resolved
/// by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentInput {
    pub sku: String,
    pub warehouse: String,
    pub quantity: i64,
    pub reason: String,
}

/// Input for a warehouse-to-warehouse movement.
///
/// The sign of `quantity` is ignored; a transfer always moves `abs(quantity)`
/// units from source to destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInput {
    pub sku: String,
    pub from_warehouse: String,
    pub to_warehouse: String,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_serializes_as_wire_strings() {
        assert_eq!(
            serde_json::to_string(&MovementDirection::In).unwrap(),
            "\"IN\""
        );
        assert_eq!(
            serde_json::to_string(&MovementDirection::Out).unwrap(),
            "\"OUT\""
        );
        let back: MovementDirection = serde_json::from_str("\"OUT\"").unwrap();
        assert_eq!(back, MovementDirection::Out);
    }

    #[test]
    fn signed_quantity_folds_direction() {
        let entry = LedgerEntry {
            ledger_id: LedgerId::new(1),
            doc_id: "doc-ajuste-0".to_string(),
            unit_cost: 10,
            direction: MovementDirection::Out,
            created_at: Utc::now(),
            warehouse_id: WarehouseId::new("wh-1"),
            location_id: Some(LocationId::new("loc-1")),
            quantity: 20,
            variant_id: VariantId::new("var-1"),
        };
        assert_eq!(entry.signed_quantity(), -20);
        let entry = LedgerEntry {
            direction: MovementDirection::In,
            ..entry
        };
        assert_eq!(entry.signed_quantity(), 20);
    }
}
