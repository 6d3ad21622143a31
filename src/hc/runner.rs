//! Hill-climbing execution loop.

use super::config::HcConfig;
use super::types::HillClimbProblem;
use crate::rng::seeded_rng;

/// Result of a hill-climbing run.
///
/// A nonzero terminal cost is a normal outcome: hill climbing commits to
/// the first local optimum it reaches. Callers inspect `best_cost` to
/// decide whether the result is globally optimal for their problem.
#[derive(Debug, Clone)]
pub struct HcResult<S: Clone> {
    /// The terminal state.
    pub best: S,

    /// Cost of the terminal state.
    pub best_cost: f64,

    /// Number of accepted moves.
    pub steps: usize,

    /// Whether the run ended at a local optimum (no strictly improving
    /// neighbor), as opposed to hitting the step cap.
    pub local_optimum: bool,
}

/// Executes steepest-descent hill climbing.
pub struct HcRunner;

impl HcRunner {
    /// Runs hill climbing from a random initial state.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run<P: HillClimbProblem>(problem: &P, config: &HcConfig) -> HcResult<P::State> {
        config.validate().expect("invalid HcConfig");
        let mut rng = seeded_rng(config.seed);
        let initial = problem.initial_state(&mut rng);
        Self::run_from(problem, config, initial)
    }

    /// Runs hill climbing from a caller-supplied initial state.
    ///
    /// Deterministic: the runner itself draws no randomness, so the same
    /// initial state always yields the same terminal state.
    pub fn run_from<P: HillClimbProblem>(
        problem: &P,
        config: &HcConfig,
        initial: P::State,
    ) -> HcResult<P::State> {
        config.validate().expect("invalid HcConfig");

        let mut current = initial;
        let mut current_cost = problem.cost(&current);
        let mut steps = 0usize;

        loop {
            if config.max_steps > 0 && steps >= config.max_steps {
                return HcResult {
                    best: current,
                    best_cost: current_cost,
                    steps,
                    local_optimum: false,
                };
            }

            // Steepest descent: scan the whole neighborhood for the
            // strictly best improvement.
            let mut best_neighbor: Option<P::State> = None;
            let mut best_neighbor_cost = current_cost;
            for neighbor in problem.neighborhood(&current) {
                let cost = problem.cost(&neighbor);
                if cost < best_neighbor_cost {
                    best_neighbor_cost = cost;
                    best_neighbor = Some(neighbor);
                }
            }

            match best_neighbor {
                Some(neighbor) => {
                    current = neighbor;
                    current_cost = best_neighbor_cost;
                    steps += 1;
                    problem.on_step(steps, &current, current_cost);
                }
                None => {
                    return HcResult {
                        best: current,
                        best_cost: current_cost,
                        steps,
                        local_optimum: true,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // ---- Discrete quadratic on a bounded integer line ----

    struct IntLine {
        lo: i64,
        hi: i64,
    }

    impl HillClimbProblem for IntLine {
        type State = i64;

        fn initial_state<R: Rng>(&self, rng: &mut R) -> i64 {
            rng.random_range(self.lo..=self.hi)
        }

        fn cost(&self, x: &i64) -> f64 {
            ((x - 3) * (x - 3)) as f64
        }

        fn neighborhood(&self, x: &i64) -> Vec<i64> {
            [x - 1, x + 1]
                .into_iter()
                .filter(|v| (self.lo..=self.hi).contains(v))
                .collect()
        }
    }

    #[test]
    fn test_descends_to_global_minimum() {
        let problem = IntLine { lo: -50, hi: 50 };
        let config = HcConfig::default().with_seed(42);
        let result = HcRunner::run(&problem, &config);
        assert_eq!(result.best, 3);
        assert_eq!(result.best_cost, 0.0);
        assert!(result.local_optimum);
    }

    #[test]
    fn test_run_from_is_deterministic() {
        let problem = IntLine { lo: -50, hi: 50 };
        let config = HcConfig::default();
        let a = HcRunner::run_from(&problem, &config, -40);
        let b = HcRunner::run_from(&problem, &config, -40);
        assert_eq!(a.best, b.best);
        assert_eq!(a.steps, b.steps);
        assert_eq!(a.steps, 43);
    }

    #[test]
    fn test_step_cap() {
        let problem = IntLine { lo: -50, hi: 50 };
        let config = HcConfig::default().with_max_steps(5);
        let result = HcRunner::run_from(&problem, &config, -40);
        assert_eq!(result.steps, 5);
        assert!(!result.local_optimum);
        assert_eq!(result.best, -35);
    }

    // ---- A deceptive landscape with a local optimum ----

    struct TwoBasins;

    impl HillClimbProblem for TwoBasins {
        type State = i64;

        fn initial_state<R: Rng>(&self, rng: &mut R) -> i64 {
            rng.random_range(-10..=10)
        }

        // Minima at x = -5 (cost 1, local) and x = 5 (cost 0, global),
        // separated by a barrier at x = 0.
        fn cost(&self, x: &i64) -> f64 {
            match x {
                -5 => 1.0,
                5 => 0.0,
                0 => 100.0,
                x if *x < 0 => (x + 5).abs() as f64 + 2.0,
                x => (x - 5).abs() as f64 + 1.0,
            }
        }

        fn neighborhood(&self, x: &i64) -> Vec<i64> {
            vec![x - 1, x + 1]
        }
    }

    #[test]
    fn test_stops_at_local_optimum() {
        let problem = TwoBasins;
        let config = HcConfig::default();
        let result = HcRunner::run_from(&problem, &config, -9);
        assert_eq!(result.best, -5);
        assert_eq!(result.best_cost, 1.0);
        assert!(result.local_optimum);
    }

    #[test]
    fn test_round_trip_cost() {
        let problem = TwoBasins;
        let result = HcRunner::run_from(&problem, &HcConfig::default(), 9);
        assert_eq!(problem.cost(&result.best), result.best_cost);
    }
}
