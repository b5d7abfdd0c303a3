//! Board state machine for a single game.

use super::error::BoardError;
use super::rules::{self, Grid};
use super::types::{Cell, Coord, Mark, Move, SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStatus {
    /// No move has been played.
    Empty,
    /// Moves remain and nobody has a line.
    InProgress,
    /// The mark that played last completed a line.
    Won(Mark),
    /// Every cell is taken and nobody has a line.
    Drawn,
}

impl BoardStatus {
    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, BoardStatus::Won(_) | BoardStatus::Drawn)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Tracks the grid, whose turn it is, the moves played so far and the
/// cells still open. `X` always moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
    current_turn: Mark,
    history: Vec<Move>,
    legal_moves: Vec<Coord>,
}

impl Board {
    /// Creates a board in its reset state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
            current_turn: Mark::X,
            history: Vec::new(),
            legal_moves: Coord::ALL.to_vec(),
        }
    }

    /// Clears the grid and hands the turn back to `X`.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Board reset");
    }

    /// Whether `coord` is on the grid and empty.
    pub fn is_legal_move(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.cells[coord.row][coord.col] == Cell::Empty
    }

    /// Places `mark` at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfTurn`] if `mark` is not the mark to move.
    /// The board is left untouched in that case.
    ///
    /// An out-of-range or occupied `coord` is ignored and `Ok(())` is
    /// returned. Callers validate against [`Board::legal_moves`] beforehand.
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn apply_move(&mut self, coord: Coord, mark: Mark) -> Result<(), BoardError> {
        if mark != self.current_turn {
            warn!(expected = %self.current_turn, attempted = %mark, "Move out of turn");
            return Err(BoardError::OutOfTurn {
                expected: self.current_turn,
                attempted: mark,
            });
        }

        if !self.is_legal_move(coord) {
            debug!(?coord, "Ignoring illegal coordinate");
            return Ok(());
        }

        self.cells[coord.row][coord.col] = Cell::Marked(mark);
        self.history.push(Move::new(mark, coord));
        self.legal_moves = self.open_cells();
        self.current_turn = mark.opponent();

        debug!(remaining = self.legal_moves.len(), "Move applied");
        Ok(())
    }

    /// Whether `mark` owns a full line.
    ///
    /// Always false before the first move. Meant to be asked for the mark
    /// that just moved.
    #[instrument(skip(self))]
    pub fn check_win(&self, mark: Mark) -> bool {
        self.last_move().is_some() && rules::has_line(&self.cells, mark)
    }

    /// Open cells in row-major order.
    pub fn legal_moves(&self) -> &[Coord] {
        &self.legal_moves
    }

    /// Mark to move next.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Coordinate of the most recent move.
    pub fn last_move(&self) -> Option<Coord> {
        self.history.last().map(|m| m.coord)
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Cell at `coord`, or `None` when off the grid.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    /// Grid rows, indexed `[row][col]`.
    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Whether no cell is open.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Derives the game status from the grid.
    #[instrument(skip(self))]
    pub fn status(&self) -> BoardStatus {
        let Some(last) = self.history.last() else {
            return BoardStatus::Empty;
        };
        if self.check_win(last.mark) {
            BoardStatus::Won(last.mark)
        } else if self.legal_moves.is_empty() {
            BoardStatus::Drawn
        } else {
            BoardStatus::InProgress
        }
    }

    fn open_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|c| self.cells[c.row][c.col] == Cell::Empty)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
