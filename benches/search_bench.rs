//! Criterion benchmarks for the N-Queens strategies.
//!
//! Fixed seeds keep the stochastic strategies comparable between runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_nqueens::backtrack::{BacktrackConfig, BacktrackRunner};
use u_nqueens::best_first::{BestFirstConfig, BestFirstRunner};
use u_nqueens::board::{conflicts, neighbors, Board};
use u_nqueens::cultural::{CulturalConfig, CulturalRunner};
use u_nqueens::hill::{HillClimbConfig, HillClimbRunner};
use u_nqueens::search::create_rng;

// ===========================================================================
// Evaluator
// ===========================================================================

fn bench_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflicts");

    for &n in &[8usize, 32, 128] {
        let board = Board::random(n, &mut create_rng(Some(42)));
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| black_box(conflicts(black_box(board))))
        });
    }
    group.finish();
}

fn bench_neighborhood(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhood_scan");
    group.sample_size(20);

    for &n in &[8usize, 16, 32] {
        let board = Board::random(n, &mut create_rng(Some(42)));
        group.bench_with_input(BenchmarkId::from_parameter(n), &board, |b, board| {
            b.iter(|| {
                let best = neighbors(black_box(board)).map(|nb| conflicts(&nb)).min();
                black_box(best)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Strategies
// ===========================================================================

fn bench_backtracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtracking_all_solutions");
    group.sample_size(10);

    for &n in &[6usize, 8, 10] {
        let config = BacktrackConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| black_box(BacktrackRunner::run(black_box(n), config)))
        });
    }
    group.finish();
}

fn bench_hill_climbing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climbing");
    group.sample_size(10);

    for &n in &[8usize, 16, 24] {
        let config = HillClimbConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| black_box(HillClimbRunner::run(black_box(n), config)))
        });
    }
    group.finish();
}

fn bench_best_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_first");
    group.sample_size(10);

    for &n in &[6usize, 8, 10] {
        let config = BestFirstConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| black_box(BestFirstRunner::run(black_box(n), config)))
        });
    }
    group.finish();
}

fn bench_cultural(c: &mut Criterion) {
    let mut group = c.benchmark_group("cultural");
    group.sample_size(10);

    for (n, pop, gen) in [(8usize, 50usize, 200usize), (12, 100, 200)] {
        let config = CulturalConfig::default()
            .with_pop_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), n),
            &config,
            |b, config| b.iter(|| black_box(CulturalRunner::run(black_box(n), config))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_conflicts,
    bench_neighborhood,
    bench_backtracking,
    bench_hill_climbing,
    bench_best_first,
    bench_cultural
);
criterion_main!(benches);
