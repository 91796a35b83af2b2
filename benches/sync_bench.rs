//! Benchmarks for tempo synchronization.
//!
//! Run with: cargo bench
//!
//! A pass runs on every keystroke, so it should stay far below a frame.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tempo_sync::tempo::rounding::round_to_places;
use tempo_sync::{synchronize, FieldSet, TableVariant, TempoSync};

fn bench_synchronize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync/synchronize");

    for variant in TableVariant::ALL {
        let table = variant.table();
        group.bench_with_input(
            BenchmarkId::new("quarter-note", variant.name()),
            &table,
            |b, table| {
                b.iter(|| {
                    synchronize(
                        black_box(table),
                        black_box("quarter-note"),
                        black_box(133.0),
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_on_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync/on_input");

    for variant in TableVariant::ALL {
        let mut sync = TempoSync::new(variant.table(), FieldSet::new());
        group.bench_function(BenchmarkId::new("field_set", variant.name()), |b| {
            b.iter(|| sync.on_input(black_box("quarter-note"), black_box("133.5")))
        });
    }

    group.finish();
}

fn bench_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync/rounding");

    for places in [2u8, 3] {
        group.bench_with_input(
            BenchmarkId::new("round_to_places", places),
            &places,
            |b, &places| b.iter(|| round_to_places(black_box(100.0 / 3.0), places)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_synchronize, bench_on_input, bench_rounding);
criterion_main!(benches);
