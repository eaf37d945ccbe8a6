use criterion::{Criterion, criterion_group, criterion_main};
use tsp_core::graph::manhattan::{ManhattanGraph, Point};
use tsp_solvers::{fast, little};

/// Deterministic xorshift so benches see the same points every run.
fn pseudo_random_points(count: usize) -> Vec<Point> {
    let mut state: u64 = 0x9e3779b97f4a7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|_| Point {
            x: (next() % 100) as i32,
            y: (next() % 100) as i32,
        })
        .collect()
}

fn little_benchmark(c: &mut Criterion) {
    let graph = ManhattanGraph::new(100, &pseudo_random_points(12));
    c.bench_function("Little branch-and-bound on 12 vertices", |b| {
        b.iter(|| little::solve(&graph))
    });
}

fn fast_benchmark(c: &mut Criterion) {
    let graph = ManhattanGraph::new(100, &pseudo_random_points(100));
    c.bench_function("Cheapest insertion on 100 vertices", |b| {
        b.iter(|| fast::solve(&graph))
    });
}

criterion_group!(solvers, little_benchmark, fast_benchmark);
criterion_main!(solvers);
