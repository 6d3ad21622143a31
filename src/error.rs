//! Crate error type.
//!
//! Only malformed input is an error. Exhaustive searches that find no
//! solution report `NotFound`/`Unsatisfiable` as ordinary outcome
//! variants, and stochastic engines that end above the global optimum
//! report the final state with its score; neither goes through `Error`.

use thiserror::Error;

/// Errors surfaced by problem construction and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed problem definition: grid without start/goal, ragged
    /// rows, empty variable or domain sets. Detected before any search
    /// work begins; no partial result is produced.
    #[error("invalid problem: {0}")]
    InvalidProblem(String),
}
