//! The N-Queens problem, usable with all three metaheuristic runners.

use crate::ga::GaProblem;
use crate::hc::HillClimbProblem;
use crate::sa::SaProblem;
use rand::Rng;

/// Place N queens on an N×N board so that no two attack each other.
///
/// A board is a `Vec<usize>` of length N: index is the column, value is
/// the row of that column's queen. One queen per column by construction,
/// so only row and diagonal attacks remain.
///
/// The same instance plugs into hill climbing and SA (minimizing
/// attacking pairs) and into the GA (maximizing non-attacking pairs,
/// with `n(n-1)/2` as the known optimum for early termination).
///
/// # Examples
///
/// ```
/// use searchlab::ga::{GaConfig, GaRunner};
/// use searchlab::problems::NQueens;
///
/// let problem = NQueens::new(8);
/// let config = GaConfig::default().with_seed(7);
/// let result = GaRunner::run(&problem, &config);
/// if result.reached_max_fitness {
///     assert_eq!(problem.attacking_pairs(&result.best), 0);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NQueens {
    n: usize,
}

impl NQueens {
    /// Creates an instance of board size `n`.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// The board size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Counts the pairs of queens attacking each other: same row, or
    /// same diagonal (row distance equals column distance). Zero means
    /// the board is a solution.
    pub fn attacking_pairs(&self, board: &[usize]) -> usize {
        let mut pairs = 0;
        for i in 0..board.len() {
            for j in i + 1..board.len() {
                let same_row = board[i] == board[j];
                let same_diagonal = board[i].abs_diff(board[j]) == j - i;
                if same_row || same_diagonal {
                    pairs += 1;
                }
            }
        }
        pairs
    }

    /// Total number of queen pairs, `n(n-1)/2`. This is the fitness of a
    /// solved board when counting non-attacking pairs.
    pub fn max_pairs(&self) -> usize {
        self.n * (self.n - 1) / 2
    }

    fn random_board<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        (0..self.n).map(|_| rng.random_range(0..self.n)).collect()
    }
}

impl HillClimbProblem for NQueens {
    type State = Vec<usize>;

    fn initial_state<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        self.random_board(rng)
    }

    fn cost(&self, board: &Vec<usize>) -> f64 {
        self.attacking_pairs(board) as f64
    }

    /// Every board reachable by moving one queen within its column,
    /// enumerated column by column, target row ascending.
    fn neighborhood(&self, board: &Vec<usize>) -> Vec<Vec<usize>> {
        let mut neighbors = Vec::with_capacity(self.n * self.n.saturating_sub(1));
        for col in 0..self.n {
            for row in 0..self.n {
                if row == board[col] {
                    continue;
                }
                let mut neighbor = board.clone();
                neighbor[col] = row;
                neighbors.push(neighbor);
            }
        }
        neighbors
    }
}

impl SaProblem for NQueens {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        self.random_board(rng)
    }

    fn cost(&self, board: &Vec<usize>) -> f64 {
        self.attacking_pairs(board) as f64
    }

    /// Moves one random queen to a random row within its column.
    fn neighbor<R: Rng>(&self, board: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut next = board.clone();
        let col = rng.random_range(0..self.n);
        next[col] = rng.random_range(0..self.n);
        next
    }
}

impl GaProblem for NQueens {
    fn genome_length(&self) -> usize {
        self.n
    }

    fn gene_values(&self) -> usize {
        self.n
    }

    /// Non-attacking pairs. A solved board scores `n(n-1)/2`.
    fn fitness(&self, genome: &[usize]) -> f64 {
        (self.max_pairs() - self.attacking_pairs(genome)) as f64
    }

    fn max_fitness(&self) -> Option<f64> {
        Some(self.max_pairs() as f64)
    }
}
