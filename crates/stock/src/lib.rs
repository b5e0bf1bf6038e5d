//! Warehouse stock simulation (in-memory).
//!
//! This crate models a warehouse inventory snapshot — warehouses, locations,
//! variants, per-location stock rows and an append-only movement ledger —
//! together with the two mutating operations (adjustment, transfer) that an
//! admin surface drives against it. Everything is deterministic, synchronous
//! domain logic over owned state: no IO, no storage, no locking.

pub mod ledger;
pub mod model;
pub mod seed;

pub use ledger::InventoryLedger;
pub use model::{
    AdjustmentInput, InventoryRow, LedgerEntry, MovementDirection, ReorderRule, Reservation,
    StockLocation, StockSnapshot, TransferInput, Variant, Warehouse,
};
