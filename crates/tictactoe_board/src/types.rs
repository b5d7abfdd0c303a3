//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    #[display("X")]
    X,
    /// Mark O, printed as a zero.
    #[display("0")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// Glyph used when printing the grid.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => "_",
            Cell::Marked(Mark::X) => "X",
            Cell::Marked(Mark::O) => "0",
        }
    }
}

/// Zero-based grid coordinate.
///
/// Any pair can be built, including out-of-range ones; the board decides
/// whether a coordinate is playable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    /// Row index (first grid dimension).
    pub row: usize,
    /// Column index (second grid dimension).
    pub col: usize,
}

impl Coord {
    /// All in-range coordinates in row-major order.
    pub const ALL: [Coord; SIZE * SIZE] = [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(0, 2),
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 0),
        Coord::new(2, 1),
        Coord::new(2, 2),
    ];

    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both indices fall inside the grid.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.col + 1)
    }
}

/// A mark placed on a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who played.
    pub mark: Mark,
    /// Where.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, coord: Coord) -> Self {
        Self { mark, coord }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Cell::Empty.glyph(), "_");
        assert_eq!(Cell::Marked(Mark::X).glyph(), "X");
        assert_eq!(Cell::Marked(Mark::O).glyph(), "0");
        assert_eq!(Mark::O.to_string(), "0");
    }

    #[test]
    fn test_in_bounds() {
        assert!(Coord::ALL.iter().all(|c| c.in_bounds()));
        assert!(!Coord::new(3, 0).in_bounds());
        assert!(!Coord::new(5, 5).in_bounds());
    }

    #[test]
    fn test_coord_display_is_one_based() {
        assert_eq!(Coord::new(0, 2).to_string(), "row 1, column 3");
    }
}
