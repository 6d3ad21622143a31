//! Core trait for hill climbing.

use rand::Rng;

/// Defines a hill-climbing problem.
///
/// The user implements state sampling, cost evaluation, and full
/// neighborhood enumeration; the runner handles the move rule and
/// termination.
///
/// # Minimization
///
/// The runner minimizes `cost`. For maximization, negate the cost.
///
/// # Determinism
///
/// [`neighborhood`](HillClimbProblem::neighborhood) must enumerate in a
/// fixed order: given the same starting state, the runner then reaches
/// the same terminal state on every run. Randomness enters only through
/// [`initial_state`](HillClimbProblem::initial_state).
pub trait HillClimbProblem {
    /// The state representation type.
    type State: Clone;

    /// Samples a random starting state.
    fn initial_state<R: Rng>(&self, rng: &mut R) -> Self::State;

    /// Computes the cost of a state. Lower is better.
    fn cost(&self, state: &Self::State) -> f64;

    /// Enumerates the complete neighborhood of a state, in a fixed
    /// deterministic order.
    fn neighborhood(&self, state: &Self::State) -> Vec<Self::State>;

    /// Called once per accepted move with the new state. Default no-op.
    fn on_step(&self, _step: usize, _state: &Self::State, _cost: f64) {}
}
