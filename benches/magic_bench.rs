//! Criterion benchmarks for magic-search.
//!
//! Measures the full-recompute evaluator on its own and the restart loop on
//! small squares, both under fixed seeds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use magic_search::candidate::CandidateGenerator;
use magic_search::random::create_rng;
use magic_search::{DistanceEvaluator, MagicRunner, SearchConfig};

// ===========================================================================
// Evaluation
// ===========================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &size in &[4usize, 10, 30] {
        for &power in &[1u32, 3, 5] {
            let upper = (size * size * 4) as i64;
            let mut rng = create_rng(42);
            let grid = CandidateGenerator::new(1, upper, false).fill(size, &mut rng);
            let evaluator = DistanceEvaluator::new(power);
            group.bench_with_input(
                BenchmarkId::new(format!("n{}_p{}", size, power), size),
                &(grid, evaluator),
                |b, (g, e)| b.iter(|| black_box(e.evaluate(black_box(g)))),
            );
        }
    }
    group.finish();
}

// ===========================================================================
// Full search
// ===========================================================================

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for &size in &[3usize, 4, 5] {
        let config = SearchConfig::default()
            .with_size(size)
            .with_bounds(1, (size * size * 4) as i64)
            .with_seed(3493)
            .with_improve_rounds(200)
            .with_max_restarts(20);
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, c| {
            b.iter(|| {
                let result = MagicRunner::run(black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_solve);
criterion_main!(benches);
