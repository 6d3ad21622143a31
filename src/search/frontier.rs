//! Frontier disciplines.
//!
//! The priority frontier uses lazy deletion: duplicate entries for a
//! node created before a cheaper path was found stay in the heap, and
//! the runner's stale-entry guard discards them at pop time. An entry is
//! authoritative only if its stored cost still equals the best-known
//! cost for its node when popped.

use super::types::{Algorithm, Path};
use crate::maze::Position;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// A heap entry ordered by ascending priority, ties broken by insertion
/// order so that runs are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry {
    priority: usize,
    seq: u64,
    path: Path,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the minimum
        // (priority, seq) popped first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

enum Store {
    Fifo(VecDeque<Path>),
    Lifo(Vec<Path>),
    Priority(BinaryHeap<HeapEntry>),
}

/// The set of discovered-but-not-yet-expanded paths, with the pop
/// discipline of the selected algorithm.
pub struct Frontier {
    store: Store,
    next_seq: u64,
}

impl Frontier {
    /// An empty frontier with the discipline `algorithm` requires:
    /// FIFO for BFS, LIFO for DFS, min-priority otherwise.
    pub fn new(algorithm: Algorithm) -> Self {
        let store = match algorithm {
            Algorithm::Bfs => Store::Fifo(VecDeque::new()),
            Algorithm::Dfs => Store::Lifo(Vec::new()),
            Algorithm::Ucs | Algorithm::Greedy | Algorithm::AStar => {
                Store::Priority(BinaryHeap::new())
            }
        };
        Self { store, next_seq: 0 }
    }

    /// Inserts a path. `priority` is ignored by the FIFO and LIFO
    /// disciplines.
    pub fn push(&mut self, priority: usize, path: Path) {
        match &mut self.store {
            Store::Fifo(queue) => queue.push_back(path),
            Store::Lifo(stack) => stack.push(path),
            Store::Priority(heap) => {
                heap.push(HeapEntry {
                    priority,
                    seq: self.next_seq,
                    path,
                });
                self.next_seq += 1;
            }
        }
    }

    /// Removes and returns the next path under the discipline, or
    /// `None` when the frontier is exhausted.
    pub fn pop(&mut self) -> Option<Path> {
        match &mut self.store {
            Store::Fifo(queue) => queue.pop_front(),
            Store::Lifo(stack) => stack.pop(),
            Store::Priority(heap) => heap.pop().map(|entry| entry.path),
        }
    }

    /// Tip position of every stored path, for snapshots. Order is not
    /// meaningful for the priority discipline.
    pub fn positions(&self) -> Vec<Position> {
        let tip = |path: &Path| *path.last().expect("frontier paths are never empty");
        match &self.store {
            Store::Fifo(queue) => queue.iter().map(tip).collect(),
            Store::Lifo(stack) => stack.iter().map(tip).collect(),
            Store::Priority(heap) => heap.iter().map(|entry| tip(&entry.path)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match &self.store {
            Store::Fifo(queue) => queue.len(),
            Store::Lifo(stack) => stack.len(),
            Store::Priority(heap) => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
