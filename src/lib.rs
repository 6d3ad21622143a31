//! Classical AI search and optimization engines.
//!
//! Provides generic, renderer-free implementations of the algorithms
//! found in introductory AI courses:
//!
//! - **Graph search** over character-grid mazes: BFS, DFS, uniform-cost,
//!   greedy best-first, and A* with a Manhattan heuristic, all driven by
//!   one frontier engine.
//! - **Hill climbing**: steepest-descent local search over a fully
//!   enumerated neighborhood.
//! - **Simulated annealing (SA)**: single-neighbor trajectory search with
//!   Metropolis acceptance and geometric cooling.
//! - **Genetic algorithm (GA)**: integer-genome evolution with tournament
//!   selection, single-point crossover, mutation, and elitism.
//! - **CSP**: backtracking over variables/domains/constraints with MRV
//!   variable ordering, forward checking, and an optimizing variant that
//!   ranks complete assignments by soft-constraint penalty.
//!
//! # Architecture
//!
//! Every engine is a pure data transformation: problem definitions are
//! borrowed immutably, all mutable search state is owned by the active
//! call, and per-step reporting goes through observer callbacks that
//! default to no-ops. Rendering, prompts, and animation cadence live
//! entirely outside this crate.

pub mod csp;
pub mod error;
pub mod ga;
pub mod hc;
pub mod maze;
pub mod problems;
pub mod sa;
pub mod search;

mod rng;

pub use error::Error;
