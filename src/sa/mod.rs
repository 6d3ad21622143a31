//! Simulated Annealing (SA).
//!
//! Single-solution trajectory search: one random neighbor per
//! iteration, Metropolis acceptance of worsening moves, geometric
//! cooling after every iteration. Stops at the temperature floor or,
//! when configured, as soon as the cost reaches a target.
//!
//! # References
//!
//! Kirkpatrick et al. (1983), Cerny (1985)

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
pub use types::SaProblem;
