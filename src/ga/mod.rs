//! Genetic Algorithm (GA) over integer genomes.
//!
//! Population-based search with tournament selection, single-point
//! crossover, one-gene mutation, and single-individual elitism. Fitness
//! is maximized, and the per-generation best never decreases because the
//! best individual is carried unchanged into every next generation.

mod config;
mod operators;
mod runner;
mod types;

pub use config::GaConfig;
pub use operators::{mutate, random_genome, single_point_crossover, tournament};
pub use runner::{GaResult, GaRunner};
pub use types::{GaProblem, Genome};
