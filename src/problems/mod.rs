//! Ready-made problem definitions for the metaheuristic runners.

mod nqueens;

pub use nqueens::NQueens;
