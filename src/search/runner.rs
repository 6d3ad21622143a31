//! The expansion loop shared by all five algorithms.

use super::frontier::Frontier;
use super::heuristics::{manhattan, priority};
use super::types::{Algorithm, NoopObserver, SearchObserver, SearchOutcome, SearchResult, SearchSnapshot};
use crate::maze::Maze;
use std::collections::HashMap;

/// Runs graph searches over a [`Maze`].
///
/// # Usage
///
/// ```
/// use searchlab::maze::Maze;
/// use searchlab::search::{Algorithm, SearchOutcome, SearchRunner};
///
/// let maze = Maze::parse(&["S  ", "## ", "E  "]).unwrap();
/// let result = SearchRunner::run(&maze, Algorithm::AStar);
/// match result.outcome {
///     SearchOutcome::Found(path) => assert_eq!(path.len() - 1, 6),
///     SearchOutcome::NotFound => unreachable!(),
/// }
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs `algorithm` on `maze` with no observer.
    pub fn run(maze: &Maze, algorithm: Algorithm) -> SearchResult {
        Self::run_with_observer(maze, algorithm, &mut NoopObserver)
    }

    /// Runs `algorithm` on `maze`, reporting one snapshot per expansion.
    ///
    /// Termination is guaranteed: the position space is finite and the
    /// visited bookkeeping admits each position a bounded number of
    /// times. An empty frontier yields [`SearchOutcome::NotFound`].
    pub fn run_with_observer<O: SearchObserver>(
        maze: &Maze,
        algorithm: Algorithm,
        observer: &mut O,
    ) -> SearchResult {
        let start = maze.start();
        let goal = maze.goal();

        let mut frontier = Frontier::new(algorithm);
        frontier.push(
            priority(algorithm, 0, manhattan(start, goal)),
            vec![start],
        );

        // Best-known g per position. BFS marks at enqueue, DFS at first
        // dequeue, the cost-based searches relax on cheaper paths; the
        // start is known at cost zero under every discipline.
        let mut visited: HashMap<_, _> = HashMap::new();
        visited.insert(start, 0);

        let mut expanded = 0usize;

        while let Some(path) = frontier.pop() {
            let current = *path.last().expect("frontier paths are never empty");
            let path_cost = path.len() - 1;

            if algorithm.is_cost_based() {
                // Stale-entry guard (lazy deletion): the entry is only
                // authoritative if its cost still matches the best-known
                // cost for this node. Comparing against the path length
                // assumes the unit-cost grid; with weighted edges the
                // entry's own stored cost would have to be compared.
                if visited[&current] < path_cost {
                    continue;
                }
            } else if algorithm == Algorithm::Dfs {
                // DFS marks at first dequeue; later pops of the same
                // node keep the first (deepest-first) cost.
                visited.entry(current).or_insert(path_cost);
            }

            expanded += 1;

            let frontier_positions = frontier.positions();
            observer.on_expand(SearchSnapshot {
                visited: &visited,
                frontier: &frontier_positions,
                current_path: &path,
            });

            // Goal test at pop time, consistent with the cost-based
            // searches where a cheaper path to the goal may be pending.
            if current == goal {
                return SearchResult {
                    outcome: SearchOutcome::Found(path),
                    visited,
                    expanded,
                };
            }

            for neighbor in maze.neighbors(current) {
                if algorithm.is_cost_based() {
                    let new_g = visited[&current] + 1;
                    let improves = visited.get(&neighbor).is_none_or(|&g| new_g < g);
                    if improves {
                        visited.insert(neighbor, new_g);
                        let h = manhattan(neighbor, goal);
                        let mut new_path = path.clone();
                        new_path.push(neighbor);
                        frontier.push(priority(algorithm, new_g, h), new_path);
                    }
                } else if !visited.contains_key(&neighbor) {
                    let mut new_path = path.clone();
                    new_path.push(neighbor);
                    if algorithm == Algorithm::Bfs {
                        visited.insert(neighbor, new_path.len() - 1);
                    }
                    frontier.push(0, new_path);
                }
            }
        }

        SearchResult {
            outcome: SearchOutcome::NotFound,
            visited,
            expanded,
        }
    }
}
