//! Hill climbing (steepest descent).
//!
//! A single-solution local search that enumerates the entire
//! neighborhood at each step and moves only on strict improvement,
//! stopping at the first local optimum. Deterministic for a fixed
//! initial state and neighborhood order.

mod config;
mod runner;
mod types;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner};
pub use types::HillClimbProblem;
