mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use depth_grid::prelude::*;

const SIZES: [u32; 4] = [2, 3, 6, 12];

fn compute_grid_benches(c: &mut Criterion) {
    let dims = FrameDimensions::new(1920, 1080);
    let mut group = c.benchmark_group("grid/compute");

    for &n in &SIZES {
        let config = GridConfig::new(n, n);
        group.throughput(common::elements_throughput(config.region_count()));
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| {
                let grid = compute_grid(black_box(dims), config).expect("valid grid");
                black_box(grid.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = compute_grid_benches
}
criterion_main!(benches);
