// File: crates/endlabel-core/benches/placement_bench.rs
// Summary: Placement pass and full render over dense and spread endpoint sets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use endlabel_core::{Chart, LabelPlacer, RenderOptions, Series};

fn spread(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 37.0) % 400.0).collect()
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_all");
    let placer = LabelPlacer::default();
    for &n in &[16usize, 128usize] {
        let dense = vec![200.0; n];
        let spread = spread(n);
        group.bench_function(format!("dense_{n}"), |b| {
            b.iter(|| black_box(placer.place_all(dense.iter().copied())));
        });
        group.bench_function(format!("spread_{n}"), |b| {
            b.iter(|| black_box(placer.place_all(spread.iter().copied())));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let series = spread(64)
        .into_iter()
        .enumerate()
        .map(|(i, y)| Series::from_xy(format!("s{i}"), &[(0.0, 200.0), (400.0, 100.0), (780.0, y)]))
        .collect::<Result<Vec<_>, _>>()
        .expect("valid series");
    let chart = Chart::with_series(series);
    let opts = RenderOptions::default();
    c.bench_function("render_64", |b| b.iter(|| black_box(chart.render(&opts))));
}

criterion_group!(benches, bench_placement, bench_render);
criterion_main!(benches);
