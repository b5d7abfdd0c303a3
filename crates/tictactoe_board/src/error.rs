//! Board error types.

use super::types::Mark;

/// Error returned when a move violates turn order.
///
/// Occupied or out-of-range coordinates are not errors: the board ignores
/// them, and callers filter with [`crate::Board::legal_moves`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A mark tried to move while it was the other mark's turn.
    #[display("Move is not in order: {} played while it was {}'s turn", attempted, expected)]
    OutOfTurn {
        /// Mark whose turn it was.
        expected: Mark,
        /// Mark that tried to move.
        attempted: Mark,
    },
}

impl std::error::Error for BoardError {}
