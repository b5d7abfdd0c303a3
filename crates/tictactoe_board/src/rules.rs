//! Win detection rules.
//!
//! Pure functions over the grid, kept apart from board storage so the
//! board and the tests can share them.

use super::types::{Cell, Coord, Mark, SIZE};
use tracing::instrument;

/// Grid storage, indexed `[row][col]`.
pub type Grid = [[Cell; SIZE]; SIZE];

/// The eight winning lines.
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    // Columns
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    // Diagonals
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(2, 0), Coord::new(1, 1), Coord::new(0, 2)],
];

/// Whether every cell of `line` holds `mark`.
pub fn line_owned_by(grid: &Grid, line: &[Coord; 3], mark: Mark) -> bool {
    line.iter()
        .all(|c| grid[c.row][c.col] == Cell::Marked(mark))
}

/// Whether `mark` owns at least one full line.
#[instrument(skip(grid))]
pub fn has_line(grid: &Grid, mark: Mark) -> bool {
    LINES.iter().any(|line| line_owned_by(grid, line, mark))
}

/// Whether no cell is empty.
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().flatten().all(|cell| *cell != Cell::Empty)
}
