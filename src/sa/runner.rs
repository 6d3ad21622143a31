//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::rng::seeded_rng;
use rand::Rng;

/// Result of a Simulated Annealing run.
///
/// Ending above the global optimum is a normal stochastic outcome, not
/// an error; callers inspect the costs to judge the result.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution seen at any point of the trajectory.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// The solution the trajectory ended on.
    pub final_state: S,

    /// Cost of the final solution.
    pub final_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> SaResult<P::Solution> {
        config.validate().expect("invalid SaConfig");

        let mut rng = seeded_rng(config.seed);

        let mut current = problem.initial_solution(&mut rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let reached_target =
            |cost: f64| config.target_cost.is_some_and(|target| cost <= target);

        while temperature > config.min_temperature && !reached_target(current_cost) {
            let neighbor = problem.neighbor(&current, &mut rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = neighbor_cost - current_cost;

            // Metropolis acceptance criterion.
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random_range(0.0..1.0) < (-delta / temperature).exp()
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            iterations += 1;
            problem.on_step(iterations, &current, current_cost, temperature);

            // Cool after every iteration, accepted or not.
            temperature *= config.cooling_rate;
        }

        SaResult {
            best,
            best_cost,
            final_state: current,
            final_cost: current_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Quadratic minimization: f(x) = x^2, minimum at 0 ----

    struct QuadraticProblem;

    impl SaProblem for QuadraticProblem {
        type Solution = f64;

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> f64 {
            rng.random_range(-10.0..10.0)
        }

        fn cost(&self, x: &f64) -> f64 {
            x * x
        }

        fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
            x + rng.random_range(-1.0..1.0)
        }
    }

    #[test]
    fn test_sa_quadratic_converges() {
        let problem = QuadraticProblem;
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.001)
            .with_cooling_rate(0.995)
            .with_seed(42);

        let result = SaRunner::run(&problem, &config);

        assert!(
            result.best_cost < 1.0,
            "expected near-zero cost, got {}",
            result.best_cost
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves >= result.improving_moves);
        assert!(result.best_cost <= result.final_cost);
    }

    #[test]
    fn test_sa_cools_every_iteration() {
        let problem = QuadraticProblem;
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(1.0)
            .with_cooling_rate(0.5)
            .with_seed(42);

        let result = SaRunner::run(&problem, &config);

        // 10 * 0.5^k drops below 1.0 after exactly 4 coolings.
        assert_eq!(result.iterations, 4);
        assert!(result.final_temperature < 1.0);
    }

    #[test]
    fn test_sa_target_cost_stops_early() {
        let problem = QuadraticProblem;
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(1e-9)
            .with_cooling_rate(0.9999)
            .with_target_cost(0.5)
            .with_seed(42);

        let result = SaRunner::run(&problem, &config);

        assert!(
            result.final_cost <= 0.5,
            "expected target reached, got {}",
            result.final_cost
        );
        assert!(result.final_temperature > config.min_temperature);
    }

    #[test]
    fn test_sa_accepts_uphill_at_high_temperature() {
        let problem = QuadraticProblem;
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_cooling_rate(0.999)
            .with_seed(42);

        let result = SaRunner::run(&problem, &config);

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.8,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
    }

    #[test]
    fn test_sa_seeded_runs_are_identical() {
        let problem = QuadraticProblem;
        let config = SaConfig::default().with_seed(7);
        let a = SaRunner::run(&problem, &config);
        let b = SaRunner::run(&problem, &config);
        assert_eq!(a.best_cost, b.best_cost);
        assert_eq!(a.final_cost, b.final_cost);
        assert_eq!(a.iterations, b.iterations);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_sa_round_trip_cost() {
        let problem = QuadraticProblem;
        let config = SaConfig::default().with_seed(3);
        let result = SaRunner::run(&problem, &config);
        assert_eq!(problem.cost(&result.final_state), result.final_cost);
        assert_eq!(problem.cost(&result.best), result.best_cost);
    }
}
