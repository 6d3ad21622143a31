//! Genetic operators: initialization, selection, crossover, mutation.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{GaProblem, Genome};
use rand::Rng;

/// Samples a uniformly random genome for `problem`.
pub fn random_genome<P: GaProblem, R: Rng>(problem: &P, rng: &mut R) -> Genome {
    (0..problem.genome_length())
        .map(|_| rng.random_range(0..problem.gene_values()))
        .collect()
}

/// Tournament selection: sample `k` indices uniformly at random **with
/// replacement**, return the index with the highest fitness.
///
/// Higher `k` means stronger selection pressure; k = 3 is the usual
/// default here.
///
/// # Panics
/// Panics if `fitnesses` is empty or `k` is zero.
pub fn tournament<R: Rng>(fitnesses: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!fitnesses.is_empty(), "cannot select from empty population");
    assert!(k > 0, "tournament size must be at least 1");

    let n = fitnesses.len();
    let mut best = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if fitnesses[idx] > fitnesses[best] {
            best = idx;
        }
    }
    best
}

/// Single-point crossover: a cut index is drawn uniformly from
/// `[1, len - 1]` and the child takes `parent1`'s genes before the cut
/// and `parent2`'s from it onwards. Genomes shorter than two genes have
/// no interior cut; the child is a copy of `parent1`.
pub fn single_point_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Genome {
    debug_assert_eq!(parent1.len(), parent2.len());
    let n = parent1.len();
    if n < 2 {
        return parent1.to_vec();
    }
    let cut = rng.random_range(1..n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1[..cut]);
    child.extend_from_slice(&parent2[cut..]);
    child
}

/// Mutation: reassigns one uniformly chosen gene to a uniformly chosen
/// value in `0..gene_values`. The new value may equal the old one.
pub fn mutate<R: Rng>(genome: &mut Genome, gene_values: usize, rng: &mut R) {
    let idx = rng.random_range(0..genome.len());
    genome[idx] = rng.random_range(0..gene_values);
}
