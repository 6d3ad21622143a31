//! Criterion benchmarks for the searchlab algorithms.
//!
//! Covers one representative workload per family: grid search on a
//! fixed maze, the GA on 8-queens, and CSP backtracking on the
//! Australia map-coloring instance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use searchlab::csp::{CspModel, CspSolver};
use searchlab::ga::{GaConfig, GaRunner};
use searchlab::maze::Maze;
use searchlab::problems::NQueens;
use searchlab::search::{Algorithm, SearchRunner};

fn bench_maze(name: &str) -> Maze {
    let rows = [
        "#################",
        "#S      #       #",
        "# ##### # ##### #",
        "#     # #     # #",
        "##### # ##### # #",
        "#     #     # # #",
        "# ########### # #",
        "#             #E#",
        "#################",
    ];
    Maze::parse(&rows).unwrap_or_else(|e| panic!("{name}: {e}"))
}

fn bench_search(c: &mut Criterion) {
    let maze = bench_maze("search");
    let mut group = c.benchmark_group("maze_search");
    for algorithm in [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Greedy,
        Algorithm::AStar,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{algorithm:?}")),
            &algorithm,
            |b, &algorithm| {
                b.iter(|| SearchRunner::run(black_box(&maze), algorithm));
            },
        );
    }
    group.finish();
}

fn bench_ga_nqueens(c: &mut Criterion) {
    let problem = NQueens::new(8);
    let config = GaConfig::default()
        .with_population_size(50)
        .with_max_generations(100)
        .with_seed(42);

    c.bench_function("ga_nqueens_8", |b| {
        b.iter(|| GaRunner::run(black_box(&problem), black_box(&config)));
    });
}

fn bench_csp_australia(c: &mut Criterion) {
    let mut model = CspModel::new();
    for region in ["WA", "NT", "SA", "Q", "NSW", "V", "T"] {
        model.add_variable(region, vec!["Red", "Green", "Blue"]);
    }
    for (a, b) in [
        ("WA", "NT"),
        ("WA", "SA"),
        ("NT", "SA"),
        ("NT", "Q"),
        ("SA", "Q"),
        ("SA", "NSW"),
        ("SA", "V"),
        ("Q", "NSW"),
        ("NSW", "V"),
    ] {
        model.add_not_equal(a, b);
    }

    c.bench_function("csp_australia_3color", |b| {
        b.iter(|| CspSolver::solve(black_box(&model)));
    });
}

criterion_group!(benches, bench_search, bench_ga_nqueens, bench_csp_australia);
criterion_main!(benches);
