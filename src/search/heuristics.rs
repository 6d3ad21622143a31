//! Heuristic and priority functions.

use super::types::Algorithm;
use crate::maze::Position;

/// Manhattan distance between two grid positions. Admissible for
/// 4-connected unit-cost movement, so A* stays optimal with it.
pub fn manhattan(a: Position, b: Position) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Frontier priority of a node with path cost `g` and heuristic value
/// `h` under `algorithm`: g for UCS, h for Greedy, g + h for A*.
/// BFS/DFS do not order their frontiers; their priority is zero.
pub fn priority(algorithm: Algorithm, g: usize, h: usize) -> usize {
    match algorithm {
        Algorithm::Bfs | Algorithm::Dfs => 0,
        Algorithm::Ucs => g,
        Algorithm::Greedy => h,
        Algorithm::AStar => g + h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan(Position::new(0, 0), Position::new(3, 4)), 7);
        assert_eq!(manhattan(Position::new(5, 2), Position::new(1, 2)), 4);
        assert_eq!(manhattan(Position::new(2, 2), Position::new(2, 2)), 0);
    }

    #[test]
    fn test_priority_formulas() {
        assert_eq!(priority(Algorithm::Ucs, 3, 9), 3);
        assert_eq!(priority(Algorithm::Greedy, 3, 9), 9);
        assert_eq!(priority(Algorithm::AStar, 3, 9), 12);
        assert_eq!(priority(Algorithm::Bfs, 3, 9), 0);
        assert_eq!(priority(Algorithm::Dfs, 3, 9), 0);
    }

    proptest! {
        #[test]
        fn prop_manhattan_symmetric(r1 in 0usize..50, c1 in 0usize..50,
                                    r2 in 0usize..50, c2 in 0usize..50) {
            let a = Position::new(r1, c1);
            let b = Position::new(r2, c2);
            prop_assert_eq!(manhattan(a, b), manhattan(b, a));
        }

        #[test]
        fn prop_manhattan_zero_iff_equal(r1 in 0usize..50, c1 in 0usize..50,
                                         r2 in 0usize..50, c2 in 0usize..50) {
            let a = Position::new(r1, c1);
            let b = Position::new(r2, c2);
            prop_assert_eq!(manhattan(a, b) == 0, a == b);
        }
    }
}
