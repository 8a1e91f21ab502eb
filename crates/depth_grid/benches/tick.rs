mod common;

use std::hint::black_box;

use common::PlaneSession;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use depth_grid::prelude::*;

const COVERAGE: [f64; 3] = [0.02, 0.05, 0.1];

fn tick_benches(c: &mut Criterion) {
    let session = PlaneSession {
        dims: FrameDimensions::new(640, 480),
    };

    let mut group = c.benchmark_group("sampler/tick_3x3");

    for &percent in &COVERAGE {
        let config = SamplerConfig::default().with_percent_of_view(percent);
        let mut sampler = AreaSampler::new(config);
        let first = sampler.on_tick(&session, 0.0);
        let probes = sampler
            .grid()
            .and_then(|g| g.neighborhood(0).map(|n| n.pixel_count() * g.len()))
            .unwrap_or(0);
        black_box(first);
        group.throughput(common::elements_throughput(probes));

        let mut now = 0.0;
        group.bench_with_input(BenchmarkId::from_parameter(percent), &percent, |b, _| {
            b.iter(|| {
                now += 1.0 / 60.0;
                let report = sampler.on_tick(&session, now);
                black_box(report.published);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = tick_benches
}
criterion_main!(benches);
