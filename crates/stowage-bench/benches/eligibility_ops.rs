//! Criterion micro-benchmarks for ship topology queries.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use stowage_bench::post_panamax_profile;
use stowage_core::ContainerCategory;
use stowage_crane::sort;

/// Benchmark: resolve eligible places for every category on a 20x20 ship.
fn bench_eligible_places(c: &mut Criterion) {
    let ship = post_panamax_profile().ship;
    c.bench_function("eligible_places_20x20_all_categories", |b| {
        b.iter(|| {
            for category in ContainerCategory::PLACEMENT_ORDER {
                black_box(ship.eligible_places(category));
            }
        });
    });
}

/// Benchmark: side weights and balance on a fully loaded 20x20 ship.
fn bench_balance_loaded(c: &mut Criterion) {
    let p = post_panamax_profile();
    let mut ship = p.ship.clone();
    sort(&mut ship, &p.batch, p.config.max_top_weight).unwrap();
    c.bench_function("is_balanced_loaded_20x20", |b| {
        b.iter(|| black_box(ship.is_balanced()));
    });
}

criterion_group!(benches, bench_eligible_places, bench_balance_loaded);
criterion_main!(benches);
