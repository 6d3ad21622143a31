//! Graph search over mazes.
//!
//! One frontier engine drives all five algorithms; the choice of
//! [`Algorithm`] selects the frontier discipline (FIFO, LIFO, or
//! min-priority queue) and the priority formula (g, h, or g + h).
//!
//! Each expansion is reported to a [`SearchObserver`] as a
//! [`SearchSnapshot`] before the goal test, so an external renderer can
//! animate the run without the engine depending on it.

mod frontier;
mod heuristics;
mod runner;
mod types;

pub use frontier::Frontier;
pub use heuristics::{manhattan, priority};
pub use runner::SearchRunner;
pub use types::{
    Algorithm, NoopObserver, Path, SearchObserver, SearchOutcome, SearchResult, SearchSnapshot,
};
