//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements neighbor generation and cost evaluation. The
/// runner handles temperature management, the acceptance criterion, and
/// cooling.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
pub trait SaProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Samples a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates one random neighbor of the current solution: a small
    /// perturbation, typically one variable reassigned.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;

    /// Called once per iteration with the current solution, its cost,
    /// and the temperature before cooling. Default no-op.
    fn on_step(&self, _iteration: usize, _solution: &Self::Solution, _cost: f64, _temperature: f64) {
    }
}
