//! Grid parsing, cell lookup, and neighbor generation.

use crate::error::Error;

/// A cell coordinate as `(row, col)`. Value equality and hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Kind of a maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Wall,
    Open,
    Start,
    Goal,
}

/// An immutable rectangular maze.
///
/// # Input format
///
/// Equal-length text rows. `#` is a wall, `S` the start (exactly one),
/// `E` the goal (exactly one); any other character is an open cell.
///
/// # Examples
///
/// ```
/// use searchlab::maze::Maze;
///
/// let maze = Maze::parse(&["S #", "  #", " E "]).unwrap();
/// assert_eq!(maze.rows(), 3);
/// assert_eq!(maze.cols(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Vec<Vec<Cell>>,
    start: Position,
    goal: Position,
}

/// 4-connected moves in fixed order: up, down, left, right.
const MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Maze {
    /// Parses text rows into a maze.
    ///
    /// Returns [`Error::InvalidProblem`] for empty input, ragged rows,
    /// or a start/goal count other than exactly one each.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, Error> {
        if rows.is_empty() || rows[0].as_ref().is_empty() {
            return Err(Error::InvalidProblem("maze has no cells".into()));
        }

        let width = rows[0].as_ref().chars().count();
        let mut cells = Vec::with_capacity(rows.len());
        let mut start = None;
        let mut goal = None;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(Error::InvalidProblem(format!(
                    "row {r} has width {}, expected {width}",
                    row.chars().count()
                )));
            }

            let mut line = Vec::with_capacity(width);
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '#' => Cell::Wall,
                    'S' => {
                        if start.replace(Position::new(r, c)).is_some() {
                            return Err(Error::InvalidProblem("more than one start cell".into()));
                        }
                        Cell::Start
                    }
                    'E' => {
                        if goal.replace(Position::new(r, c)).is_some() {
                            return Err(Error::InvalidProblem("more than one goal cell".into()));
                        }
                        Cell::Goal
                    }
                    _ => Cell::Open,
                };
                line.push(cell);
            }
            cells.push(line);
        }

        let start = start.ok_or_else(|| Error::InvalidProblem("maze has no start cell".into()))?;
        let goal = goal.ok_or_else(|| Error::InvalidProblem("maze has no goal cell".into()))?;

        Ok(Self { cells, start, goal })
    }

    /// Builds a maze directly from cells, for problem definitions that
    /// the text format cannot express (notably start == goal).
    ///
    /// Returns [`Error::InvalidProblem`] for an empty or ragged grid, or
    /// start/goal positions that are out of bounds or on a wall.
    pub fn from_cells(cells: Vec<Vec<Cell>>, start: Position, goal: Position) -> Result<Self, Error> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(Error::InvalidProblem("maze has no cells".into()));
        }
        let width = cells[0].len();
        if cells.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidProblem("rows have unequal widths".into()));
        }
        let maze = Self { cells, start, goal };
        for (name, pos) in [("start", start), ("goal", goal)] {
            if !maze.is_passable(pos) {
                return Err(Error::InvalidProblem(format!(
                    "{name} position ({}, {}) is not an open cell",
                    pos.row, pos.col
                )));
            }
        }
        Ok(maze)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// The unique start position.
    pub fn start(&self) -> Position {
        self.start
    }

    /// The unique goal position.
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Cell kind at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Whether `pos` is inside the grid and not a wall.
    pub fn is_passable(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols() && self.cells[pos.row][pos.col] != Cell::Wall
    }

    /// The passable 4-connected neighbors of `pos`, in the fixed order
    /// up, down, left, right. This order is part of the contract: it
    /// makes every search deterministic.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut out = Vec::with_capacity(4);
        for (dr, dc) in MOVES {
            let row = pos.row.checked_add_signed(dr);
            let col = pos.col.checked_add_signed(dc);
            if let (Some(row), Some(col)) = (row, col) {
                let next = Position::new(row, col);
                if self.is_passable(next) {
                    out.push(next);
                }
            }
        }
        out
    }

    /// Renders the maze as text with `*` overlaid on the interior of
    /// `path` (start and goal keep their own markers).
    pub fn render_with_path(&self, path: &[Position]) -> String {
        let mut rows: Vec<Vec<char>> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Wall => '#',
                        Cell::Open => ' ',
                        Cell::Start => 'S',
                        Cell::Goal => 'E',
                    })
                    .collect()
            })
            .collect();

        for pos in path.iter().skip(1).take(path.len().saturating_sub(2)) {
            rows[pos.row][pos.col] = '*';
        }

        let mut out = String::new();
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
