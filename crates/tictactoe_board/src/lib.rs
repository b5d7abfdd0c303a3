//! Tic-tac-toe board state.
//!
//! A [`Board`] owns the 3x3 grid of one game. It enforces turn order,
//! tracks the open cells and answers whether a mark has completed a line.
//! Computer players pick their moves through a [`MoveSelector`].
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Board, Coord, Mark};
//!
//! let mut board = Board::new();
//! board.apply_move(Coord::new(1, 1), Mark::X)?;
//! assert_eq!(board.current_turn(), Mark::O);
//! assert_eq!(board.legal_moves().len(), 8);
//! # Ok::<(), tictactoe_board::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod rules;
mod selector;
mod types;

pub use board::{Board, BoardStatus};
pub use error::BoardError;
pub use selector::{FirstAvailable, MoveSelector, RandomSelector, Scripted};
pub use types::{Cell, Coord, Mark, Move, SIZE};
