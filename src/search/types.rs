//! Search algorithm selection, outcomes, and the observer contract.

use crate::maze::Position;
use std::collections::HashMap;

/// The search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Breadth-first search: FIFO frontier, visited marked at enqueue.
    Bfs,
    /// Depth-first search: LIFO frontier, visited marked at first
    /// dequeue. Complete on finite grids, not optimal.
    Dfs,
    /// Uniform-cost search: priority = g.
    Ucs,
    /// Greedy best-first: priority = h. Fast, not optimal.
    Greedy,
    /// A*: priority = g + h. Optimal with the admissible Manhattan
    /// heuristic on unit-cost grids.
    AStar,
}

impl Algorithm {
    /// Whether this algorithm orders its frontier by a priority and
    /// relaxes visited costs (UCS, Greedy, A*), as opposed to the
    /// visit-once bookkeeping of BFS/DFS.
    pub fn is_cost_based(self) -> bool {
        matches!(self, Algorithm::Ucs | Algorithm::Greedy | Algorithm::AStar)
    }
}

/// An ordered sequence of positions from the start to a frontier node.
/// Path cost under unit steps is `len() - 1`.
pub type Path = Vec<Position>;

/// Terminal result of a search: a path, or exhaustion without one.
/// `NotFound` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Found(Path),
    NotFound,
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Result of a full search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Path or `NotFound`.
    pub outcome: SearchOutcome,

    /// Best-known g-value per discovered position at termination. After
    /// an exhaustive failed run this covers exactly the set of positions
    /// reachable from the start.
    pub visited: HashMap<Position, usize>,

    /// Number of frontier entries expanded (observer calls made).
    pub expanded: usize,
}

/// One frame of the search, reported per expansion.
///
/// Borrows engine state for the duration of the callback; observers
/// that animate asynchronously must copy what they need.
#[derive(Debug)]
pub struct SearchSnapshot<'a> {
    /// Best-known g-value per discovered position.
    pub visited: &'a HashMap<Position, usize>,

    /// Tip positions of every path currently on the frontier.
    pub frontier: &'a [Position],

    /// The path being expanded; its last element is the current node.
    pub current_path: &'a [Position],
}

/// Per-step consumer of search snapshots.
///
/// The engine calls [`on_expand`](SearchObserver::on_expand) once per
/// popped entry, after the stale-entry guard and before the goal test,
/// and ignores anything the observer does. Any `FnMut(SearchSnapshot)`
/// closure is an observer.
pub trait SearchObserver {
    fn on_expand(&mut self, snapshot: SearchSnapshot<'_>);
}

impl<F: FnMut(SearchSnapshot<'_>)> SearchObserver for F {
    fn on_expand(&mut self, snapshot: SearchSnapshot<'_>) {
        self(snapshot)
    }
}

/// The no-op observer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_expand(&mut self, _snapshot: SearchSnapshot<'_>) {}
}
