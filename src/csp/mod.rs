//! Constraint satisfaction: backtracking with MRV and forward checking.
//!
//! A [`CspModel`] holds variables, ordered domains, symmetric binary
//! not-equal constraints, and optional hard predicates for constraints
//! that are not binary. [`CspSolver::solve`] returns the first complete
//! consistent assignment; [`CspSolver::solve_best`] explores the whole
//! space and returns the complete assignment with the lowest
//! soft-constraint penalty.
//!
//! Hard constraints prune the search and never appear violated in a
//! returned assignment; soft constraints never prune and only rank
//! otherwise-valid complete assignments.

mod model;
mod solver;

pub use model::{Assignment, CspModel, HardConstraint, SoftConstraint, Value};
pub use solver::{
    BestOutcome, BestSolution, CspObserver, CspOutcome, CspSnapshot, CspSolver,
};
