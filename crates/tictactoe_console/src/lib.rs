//! Console tic-tac-toe against a computer that picks random legal moves.
//!
//! # Architecture
//!
//! - **Console**: line-based reader/writer pair
//! - **Input**: parses and validates the human's row and column
//! - **Render**: box-drawn grid
//! - **Session**: game loop, replay prompt and scoreboard
//! - **Config**: TOML file plus command-line overrides
//!
//! Board rules live in the `tictactoe_board` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod input;
mod render;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, FirstMover, GameConfig};
pub use console::Console;
pub use input::{InputError, ensure_open, parse_axis, read_move, request_move};
pub use render::render_board;
pub use session::{Outcome, Roles, Scoreboard, Session};
