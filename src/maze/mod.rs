//! Rectangular character-grid maze model.
//!
//! A maze is parsed once from text rows and is immutable afterwards:
//! a successfully constructed [`Maze`] always has exactly one start,
//! exactly one goal, and rectangular shape, so the search engines never
//! re-validate it.

mod grid;

pub use grid::{Cell, Maze, Position};
