//! Benchmarks for trajectory generation and vertex preparation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lorenz_overlay::{generate, ColorTrack, LorenzParams, RenderStyle, Renderer};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for steps in [1_000, 10_000, 100_000] {
        let params = LorenzParams {
            steps,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(steps), &params, |b, params| {
            b.iter(|| black_box(generate(params)))
        });
    }

    group.finish();
}

fn bench_colors(c: &mut Criterion) {
    c.bench_function("rainbow_10k", |b| b.iter(|| black_box(ColorTrack::rainbow(10_000))));
}

fn bench_vertices(c: &mut Criterion) {
    let renderer = Renderer::new(&LorenzParams::default(), RenderStyle::rainbow());
    c.bench_function("vertices_10k", |b| b.iter(|| black_box(renderer.vertices())));
}

criterion_group!(benches, bench_generate, bench_colors, bench_vertices);
criterion_main!(benches);
