//! Reading the human's move from the console.

use crate::console::Console;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tictactoe_board::{Coord, SIZE};
use tracing::{debug, instrument, warn};

/// Why a typed move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The text was not an integer.
    #[display("Please enter integer values only")]
    NotANumber(String),

    /// The integer was outside 1..=3.
    #[display("Value is out of range 1 to 3, please try again")]
    OutOfRange(String),

    /// The cell is already taken.
    #[display("Your move is not possible - the cell is occupied, please try again")]
    Occupied(Coord),

    /// Input ended before a move was entered.
    #[display("Input closed")]
    Closed,

    /// Reading or writing the console failed.
    #[display("Console error: {}", _0)]
    Io(String),
}

impl std::error::Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Parses a 1-based row or column number into a 0-based index.
#[instrument]
pub fn parse_axis(raw: &str) -> Result<usize, InputError> {
    let value: i64 = raw.trim().parse().map_err(|err: std::num::ParseIntError| {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                InputError::OutOfRange(raw.to_string())
            }
            _ => InputError::NotANumber(raw.to_string()),
        }
    })?;

    usize::try_from(value)
        .ok()
        .and_then(|v| v.checked_sub(1))
        .filter(|&index| index < SIZE)
        .ok_or_else(|| InputError::OutOfRange(raw.to_string()))
}

/// Accepts `coord` only if it is one of the legal moves.
pub fn ensure_open(coord: Coord, legal: &[Coord]) -> Result<Coord, InputError> {
    if legal.contains(&coord) {
        Ok(coord)
    } else {
        Err(InputError::Occupied(coord))
    }
}

/// Prompts once for a row and a column.
///
/// The row is validated before the column is asked for.
#[instrument(skip(console, legal))]
pub fn read_move<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    legal: &[Coord],
) -> Result<Coord, InputError> {
    console.say("Your turn, please enter integer from 1 to 3 for row or column")?;

    let row = console.ask("   input row: ")?.ok_or(InputError::Closed)?;
    let row = parse_axis(&row)?;

    let col = console.ask("   input column: ")?.ok_or(InputError::Closed)?;
    let col = parse_axis(&col)?;

    ensure_open(Coord::new(row, col), legal)
}

/// Prompts until the human enters an open cell.
///
/// Returns `Ok(None)` if input ends first.
#[instrument(skip(console, legal))]
pub fn request_move<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    legal: &[Coord],
) -> Result<Option<Coord>, InputError> {
    loop {
        match read_move(console, legal) {
            Ok(coord) => {
                debug!(?coord, "Human move accepted");
                return Ok(Some(coord));
            }
            Err(InputError::Closed) => return Ok(None),
            Err(err @ InputError::Io(_)) => return Err(err),
            Err(err) => {
                warn!(error = ?err, "Rejected human input");
                console.say(err.to_string())?;
            }
        }
    }
}
