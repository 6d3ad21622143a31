//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete process: initialization →
//! evaluation → elitism → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::{mutate, random_genome, single_point_crossover, tournament};
use super::types::{GaProblem, Genome};
use crate::rng::seeded_rng;
use rand::Rng;

/// Result of a GA run.
///
/// Hitting the generation budget below `max_fitness` is a normal
/// outcome; `reached_max_fitness` tells the caller whether the best
/// individual is provably optimal.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best individual of the terminating generation.
    pub best: Genome,

    /// Fitness of the best individual.
    pub best_fitness: f64,

    /// Number of generations evaluated (including the initial one).
    pub generations: usize,

    /// Whether the run stopped early at the problem's maximum fitness.
    pub reached_max_fitness: bool,

    /// Best fitness of each evaluated generation. Non-decreasing, since
    /// the best individual is carried unchanged into every generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use searchlab::ga::{GaConfig, GaRunner};
/// use searchlab::problems::NQueens;
///
/// let problem = NQueens::new(8);
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// assert_eq!(result.best.len(), 8);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let mut rng = seeded_rng(config.seed);

        let mut population: Vec<Genome> = (0..config.population_size)
            .map(|_| random_genome(problem, &mut rng))
            .collect();

        let mut fitness_history = Vec::new();
        let mut generations = 0usize;

        loop {
            // Evaluate the whole population.
            let fitnesses: Vec<f64> = population.iter().map(|g| problem.fitness(g)).collect();

            let best_idx = best_index(&fitnesses);
            let best_fitness = fitnesses[best_idx];
            generations += 1;
            fitness_history.push(best_fitness);
            problem.on_generation(generations, &population, &population[best_idx], best_fitness);

            let reached_max = problem
                .max_fitness()
                .is_some_and(|max| best_fitness >= max);

            if reached_max || generations > config.max_generations {
                return GaResult {
                    best: population[best_idx].clone(),
                    best_fitness,
                    generations,
                    reached_max_fitness: reached_max,
                    fitness_history,
                };
            }

            // Elitism: the single best individual survives unchanged.
            let mut next_gen: Vec<Genome> = Vec::with_capacity(config.population_size);
            next_gen.push(population[best_idx].clone());

            // Fill the remainder from the current population.
            while next_gen.len() < config.population_size {
                let p1 = tournament(&fitnesses, config.tournament_size, &mut rng);
                let p2 = tournament(&fitnesses, config.tournament_size, &mut rng);
                let mut child = single_point_crossover(&population[p1], &population[p2], &mut rng);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    mutate(&mut child, problem.gene_values(), &mut rng);
                }
                next_gen.push(child);
            }

            population = next_gen;
        }
    }
}

/// Index of the highest fitness; first occurrence wins ties.
fn best_index(fitnesses: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitnesses.iter().enumerate() {
        if f > fitnesses[best] {
            best = i;
        }
    }
    best
}
