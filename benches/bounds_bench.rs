//! Bounds finder benchmark over a full-width histogram.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use letterbox_detect::{find_bounds, round_bounds, BoundingBoxSample, FrameHistograms};

/// A 1920x1080 frame letterboxed to 1920x800, with edge jitter.
fn letterboxed_histograms() -> FrameHistograms {
    let mut hists = FrameHistograms::new(1920, 1080);
    for i in 0..10_000u32 {
        let jitter = i % 3;
        hists
            .ingest(&BoundingBoxSample {
                x1: jitter,
                x2: 1919 - jitter,
                y1: 140 + jitter,
                y2: 939 - jitter,
            })
            .unwrap();
    }
    hists.finalize().unwrap();
    hists
}

fn bench_bounds(c: &mut Criterion) {
    let hists = letterboxed_histograms();

    c.bench_function("find_bounds_x_1920", |b| {
        b.iter(|| find_bounds(black_box(&hists.x), black_box(0.15)))
    });

    c.bench_function("find_and_round_y_1080", |b| {
        b.iter(|| {
            let bounds = find_bounds(black_box(&hists.y), black_box(0.15));
            round_bounds(bounds, black_box(16))
        })
    });
}

criterion_group!(benches, bench_bounds);
criterion_main!(benches);
