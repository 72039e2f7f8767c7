//! Criterion benchmarks for the planar kernel.
//! Results land under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use planar::api::{extend_to_viewport, intersection, Line, Viewport};
use planar::plane::point;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_lines(n: usize, seed: u64) -> Vec<Line> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let p1 = point(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
            let p2 = point(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
            Line::through(p1, p2)
        })
        .collect()
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("plane");
    group.bench_function("intersection_pairs_256", |b| {
        b.iter_batched(
            || random_lines(256, 43),
            |lines| {
                for w in lines.windows(2) {
                    black_box(intersection(&w[0], &w[1]));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("format_line_256", |b| {
        b.iter_batched(
            || random_lines(256, 44),
            |lines| {
                for l in &lines {
                    black_box(l.to_string());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("extend_to_viewport_256", |b| {
        let vp = Viewport::default();
        b.iter_batched(
            || random_lines(256, 45),
            |lines| {
                for l in &lines {
                    black_box(extend_to_viewport(l, &vp));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_kernel);
criterion_main!(benches);
