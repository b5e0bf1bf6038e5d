use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bodega_stock::{AdjustmentInput, InventoryLedger, TransferInput};

fn adjustment(quantity: i64) -> AdjustmentInput {
    AdjustmentInput {
        sku: "SKU-001".to_string(),
        warehouse: "Central".to_string(),
        quantity,
        reason: "bench".to_string(),
    }
}

fn bench_adjustments(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjustments");
    group.throughput(Throughput::Elements(1));

    group.bench_function("apply_adjustment/seeded", |b| {
        b.iter_batched(
            InventoryLedger::seeded,
            |mut ledger| {
                ledger.apply_adjustment(black_box(&adjustment(1))).unwrap();
                ledger
            },
            BatchSize::SmallInput,
        )
    });

    // Long session: row lookup and next-id both scan, so cost grows with
    // ledger size.
    group.bench_function("apply_adjustment/after_1k_entries", |b| {
        b.iter_batched(
            || {
                let mut ledger = InventoryLedger::seeded();
                for _ in 0..1_000 {
                    ledger.apply_adjustment(&adjustment(1)).unwrap();
                }
                ledger
            },
            |mut ledger| {
                ledger.apply_adjustment(black_box(&adjustment(1))).unwrap();
                ledger
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_transfers(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfers");
    group.throughput(Throughput::Elements(1));

    group.bench_function("apply_transfer/seeded", |b| {
        b.iter_batched(
            InventoryLedger::seeded,
            |mut ledger| {
                ledger
                    .apply_transfer(black_box(&TransferInput {
                        sku: "SKU-001".to_string(),
                        from_warehouse: "Central".to_string(),
                        to_warehouse: "Norte".to_string(),
                        quantity: 1,
                    }))
                    .unwrap();
                ledger
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let ledger = InventoryLedger::seeded();
    c.bench_function("snapshot/clone_seeded", |b| {
        b.iter(|| black_box(ledger.snapshot()))
    });
}

criterion_group!(benches, bench_adjustments, bench_transfers, bench_snapshot);
criterion_main!(benches);
