#[macro_use]
extern crate criterion;

use criterion::Criterion;
use trailblaze::algorithms::resample::{resample, resample_with};
use trailblaze::geom::StateSe2;
use trailblaze_tests::{spiral, zigzag};

const SPACINGS: [f64; 4] = [0.01, 0.1, 0.5, 2.0];

fn resample_zigzag(bench: &mut Criterion) {
    let input = zigzag(10_000, 0.3);
    bench.bench_function("resample zigzag r2", |b| {
        b.iter(|| {
            let mut count = 0;
            for &ds in &SPACINGS {
                let mut out = Vec::with_capacity(input.len());
                count += resample(input.states(), ds, &mut out);
            }
            criterion::black_box(count)
        })
    });
}

fn resample_spiral(bench: &mut Criterion) {
    let input = spiral(10_000, 10.0);
    bench.bench_function("resample spiral se2", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            criterion::black_box(resample(input.states(), 0.1, &mut out))
        })
    });

    // Same thing without the heading.
    let planar = |a: &StateSe2<f64>, b: &StateSe2<f64>, t: f64| {
        StateSe2::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y), b.yaw)
    };
    let metric = |a: &StateSe2<f64>, b: &StateSe2<f64>| (b.x - a.x).hypot(b.y - a.y);
    bench.bench_function("resample spiral se2 closures", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            criterion::black_box(resample_with(input.states(), 0.1, &mut out, metric, planar))
        })
    });
}

criterion_group!(resample_benches, resample_zigzag, resample_spiral);
criterion_main!(resample_benches);
