//! Command-line interface for the console game.

use crate::config::FirstMover;
use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against a computer that plays random legal moves
///
/// Every flag is optional. With none given, each game opens with a coin
/// flip and the computer plays from an unseeded generator.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who moves first in each game (overrides the config file)
    #[arg(long, value_enum)]
    pub first: Option<FirstMover>,

    /// Seed for reproducible computer moves (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}
