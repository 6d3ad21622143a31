//! Core trait for the GA.

/// A candidate solution: a fixed-length sequence of genes, each a value
/// in `0..gene_values`.
pub type Genome = Vec<usize>;

/// Defines a GA optimization problem over integer genomes.
///
/// The runner owns the evolutionary mechanics (selection, crossover,
/// mutation, elitism); the problem supplies the genome shape and the
/// fitness function.
///
/// # Maximization
///
/// Higher fitness is better. When
/// [`max_fitness`](GaProblem::max_fitness) returns a value, the runner
/// stops as soon as some individual reaches it.
pub trait GaProblem {
    /// Number of genes per genome.
    fn genome_length(&self) -> usize;

    /// Number of possible values per gene; genes are drawn uniformly
    /// from `0..gene_values()`.
    fn gene_values(&self) -> usize;

    /// Evaluates a genome. Higher is better.
    fn fitness(&self, genome: &[usize]) -> f64;

    /// The maximum attainable fitness, used for early termination.
    /// `None` disables the early stop.
    fn max_fitness(&self) -> Option<f64> {
        None
    }

    /// Called once per evaluated generation with the whole population,
    /// its best individual, and that individual's fitness. Default
    /// no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _population: &[Genome],
        _best: &[usize],
        _best_fitness: f64,
    ) {
    }
}
