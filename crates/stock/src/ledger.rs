//! The inventory ledger service.
//!
//! [`InventoryLedger`] owns a mutable [`StockSnapshot`] and is the only way
//! to move stock: `apply_adjustment` corrects one warehouse, `apply_transfer`
//! moves quantity between two. Both resolve every human-entered identifier
//! before touching state, so a failed call leaves the snapshot untouched.
//!
//! The service is built for the single-threaded, run-to-completion calling
//! model of a UI event loop: mutation goes through `&mut self` and there is
//! no locking.

use std::time::Duration;

use chrono::Utc;

use bodega_core::{DomainError, DomainResult, LedgerId, LocationId, VariantId, WarehouseId};

use crate::model::{
    AdjustmentInput, InventoryRow, LedgerEntry, MovementDirection, StockSnapshot, TransferInput,
};

/// Simulated network latency of the async snapshot accessor.
const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(200);

/// In-memory warehouse stock ledger.
///
/// Construct one per session ([`InventoryLedger::seeded`]) or per test
/// ([`InventoryLedger::new`] with a tailored snapshot).
#[derive(Debug, Clone)]
pub struct InventoryLedger {
    state: StockSnapshot,
    fetch_delay: Duration,
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::seeded()
    }
}

impl InventoryLedger {
    pub fn new(state: StockSnapshot) -> Self {
        Self {
            state,
            fetch_delay: DEFAULT_FETCH_DELAY,
        }
    }

    /// Ledger over a fresh copy of the embedded reference dataset.
    pub fn seeded() -> Self {
        Self::new(StockSnapshot::seed())
    }

    /// Override the simulated latency of [`fetch_snapshot`](Self::fetch_snapshot).
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Resolve a human-entered warehouse reference: exact id match first,
    /// then case-insensitive name match. Input is trimmed.
    pub fn resolve_warehouse_id(&self, input: &str) -> Option<WarehouseId> {
        let needle = input.trim();
        if let Some(warehouse) = self.state.warehouses.iter().find(|w| w.id.as_str() == needle) {
            return Some(warehouse.id.clone());
        }
        let lowered = needle.to_lowercase();
        self.state
            .warehouses
            .iter()
            .find(|w| w.name.to_lowercase() == lowered)
            .map(|w| w.id.clone())
    }

    /// Resolve a SKU (trimmed, case-insensitive) to its variant id.
    pub fn resolve_variant_id(&self, input: &str) -> Option<VariantId> {
        let needle = input.trim().to_lowercase();
        self.state
            .variants
            .iter()
            .find(|v| v.sku.to_lowercase() == needle)
            .map(|v| v.id.clone())
    }

    /// Default location of a warehouse: the first one in stored order.
    /// `None` for warehouses without any location; stock there is tracked
    /// under the `None` bucket.
    pub fn resolve_default_location(&self, warehouse_id: &WarehouseId) -> Option<LocationId> {
        self.state
            .locations
            .iter()
            .find(|l| &l.warehouse_id == warehouse_id)
            .map(|l| l.id.clone())
    }

    /// Owned deep copy of the current snapshot, never the live state.
    pub fn snapshot(&self) -> StockSnapshot {
        self.state.clone()
    }

    /// The same copy behind a simulated network delay. Carries no other
    /// semantics; the delay defaults to 200ms.
    pub async fn fetch_snapshot(&self) -> StockSnapshot {
        tokio::time::sleep(self.fetch_delay).await;
        self.state.clone()
    }

    /// Next ledger id: `max(existing) + 1`, 1-based on an empty ledger.
    ///
    /// Not safe under concurrent callers; the single-threaded calling model
    /// is what keeps ids unique.
    fn next_ledger_id(&self) -> LedgerId {
        self.state
            .ledger
            .iter()
            .map(|e| e.ledger_id)
            .max()
            .map(|id| id.next())
            .unwrap_or(LedgerId::new(1))
    }

    fn variant_cost(&self, variant_id: &VariantId) -> i64 {
        // Resolution has already checked existence; a missing variant maps
        // to cost 0.
        self.state
            .variants
            .iter()
            .find(|v| &v.id == variant_id)
            .map(|v| v.cost)
            .unwrap_or(0)
    }

    /// Index of the row for the composite key, appending a zeroed row if the
    /// key was never referenced before. `None` location is part of the key.
    fn ensure_inventory_row(
        &mut self,
        warehouse_id: &WarehouseId,
        location_id: Option<&LocationId>,
        variant_id: &VariantId,
    ) -> usize {
        let found = self.state.inventory.iter().position(|row| {
            &row.warehouse_id == warehouse_id
                && row.location_id.as_ref() == location_id
                && &row.variant_id == variant_id
        });
        if let Some(idx) = found {
            return idx;
        }
        self.state.inventory.push(InventoryRow {
            warehouse_id: warehouse_id.clone(),
            location_id: location_id.cloned(),
            variant_id: variant_id.clone(),
            on_hand: 0,
            reserved: 0,
            updated_at: Utc::now(),
        });
        self.state.inventory.len() - 1
    }

    /// Apply a stock correction at the warehouse's default location.
    ///
    /// The sign of `quantity` picks the direction (positive IN, negative
    /// OUT); OUT movements clamp `on_hand` at 0 while the ledger entry still
    /// records the full requested magnitude.
    pub fn apply_adjustment(&mut self, input: &AdjustmentInput) -> DomainResult<()> {
        let Some(warehouse_id) = self.resolve_warehouse_id(&input.warehouse) else {
            tracing::warn!(warehouse = %input.warehouse, "adjustment rejected: unknown warehouse");
            return Err(DomainError::unknown_warehouse(input.warehouse.trim()));
        };
        let Some(variant_id) = self.resolve_variant_id(&input.sku) else {
            tracing::warn!(sku = %input.sku, "adjustment rejected: unknown sku");
            return Err(DomainError::unknown_sku(input.sku.trim()));
        };
        if input.quantity == 0 {
            tracing::warn!(sku = %input.sku, "adjustment rejected: zero quantity");
            return Err(DomainError::validation("quantity must be non-zero"));
        }

        let direction = if input.quantity >= 0 {
            MovementDirection::In
        } else {
            MovementDirection::Out
        };
        let qty = input.quantity.saturating_abs();
        let unit_cost = self.variant_cost(&variant_id);
        let location_id = self.resolve_default_location(&warehouse_id);
        let now = Utc::now();

        let idx = self.ensure_inventory_row(&warehouse_id, location_id.as_ref(), &variant_id);
        {
            let row = &mut self.state.inventory[idx];
            row.on_hand = match direction {
                MovementDirection::In => row.on_hand + qty,
                MovementDirection::Out => (row.on_hand - qty).max(0),
            };
            row.updated_at = now;
        }

        let entry = LedgerEntry {
            ledger_id: self.next_ledger_id(),
            doc_id: format!("doc-ajuste-{}", now.timestamp_millis()),
            unit_cost,
            direction,
            created_at: now,
            warehouse_id,
            location_id,
            quantity: qty,
            variant_id,
        };
        tracing::debug!(
            doc_id = %entry.doc_id,
            warehouse = %entry.warehouse_id,
            sku = %input.sku,
            quantity = qty,
            direction = ?direction,
            reason = %input.reason,
            "stock adjustment applied"
        );
        self.state.ledger.push(entry);
        Ok(())
    }

    /// Move stock between two warehouses (default location on each side).
    ///
    /// Appends exactly two ledger entries — OUT at the source, IN at the
    /// destination — sharing one `doc_id` and one timestamp. The source is
    /// clamped at 0 like an OUT adjustment; the destination always receives
    /// the full quantity.
    pub fn apply_transfer(&mut self, input: &TransferInput) -> DomainResult<()> {
        let Some(from_id) = self.resolve_warehouse_id(&input.from_warehouse) else {
            tracing::warn!(warehouse = %input.from_warehouse, "transfer rejected: unknown source warehouse");
            return Err(DomainError::unknown_warehouse(input.from_warehouse.trim()));
        };
        let Some(to_id) = self.resolve_warehouse_id(&input.to_warehouse) else {
            tracing::warn!(warehouse = %input.to_warehouse, "transfer rejected: unknown destination warehouse");
            return Err(DomainError::unknown_warehouse(input.to_warehouse.trim()));
        };
        let Some(variant_id) = self.resolve_variant_id(&input.sku) else {
            tracing::warn!(sku = %input.sku, "transfer rejected: unknown sku");
            return Err(DomainError::unknown_sku(input.sku.trim()));
        };
        if input.quantity == 0 {
            tracing::warn!(sku = %input.sku, "transfer rejected: zero quantity");
            return Err(DomainError::validation("quantity must be non-zero"));
        }

        let qty = input.quantity.saturating_abs();
        let unit_cost = self.variant_cost(&variant_id);
        let from_location = self.resolve_default_location(&from_id);
        let to_location = self.resolve_default_location(&to_id);

        // One timestamp and one document for both sides of the movement.
        let now = Utc::now();
        let doc_id = format!("doc-transfer-{}", now.timestamp_millis());

        let src = self.ensure_inventory_row(&from_id, from_location.as_ref(), &variant_id);
        {
            let row = &mut self.state.inventory[src];
            row.on_hand = (row.on_hand - qty).max(0);
            row.updated_at = now;
        }
        let dst = self.ensure_inventory_row(&to_id, to_location.as_ref(), &variant_id);
        {
            let row = &mut self.state.inventory[dst];
            row.on_hand += qty;
            row.updated_at = now;
        }

        let out_entry = LedgerEntry {
            ledger_id: self.next_ledger_id(),
            doc_id: doc_id.clone(),
            unit_cost,
            direction: MovementDirection::Out,
            created_at: now,
            warehouse_id: from_id.clone(),
            location_id: from_location,
            quantity: qty,
            variant_id: variant_id.clone(),
        };
        self.state.ledger.push(out_entry);

        let in_entry = LedgerEntry {
            ledger_id: self.next_ledger_id(),
            doc_id: doc_id.clone(),
            unit_cost,
            direction: MovementDirection::In,
            created_at: now,
            warehouse_id: to_id.clone(),
            location_id: to_location,
            quantity: qty,
            variant_id,
        };
        self.state.ledger.push(in_entry);

        tracing::debug!(
            doc_id = %doc_id,
            from = %from_id,
            to = %to_id,
            sku = %input.sku,
            quantity = qty,
            "stock transfer applied"
        );
        Ok(())
    }
}
