//! Game driver: alternates human and computer moves and runs the replay loop.

use crate::config::GameConfig;
use crate::console::Console;
use crate::input::request_move;
use crate::render::render_board;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tictactoe_board::{Board, Mark, MoveSelector};
use tracing::{debug, info, instrument};

/// Which mark each side plays in one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    computer: Mark,
}

impl Roles {
    /// The side that moves first plays `X`.
    pub fn new(computer_first: bool) -> Self {
        let computer = if computer_first { Mark::X } else { Mark::O };
        Self { computer }
    }

    /// Mark played by the computer.
    pub fn computer(&self) -> Mark {
        self.computer
    }

    /// Mark played by the human.
    pub fn human(&self) -> Mark {
        self.computer.opponent()
    }

    /// Opening announcement for the game.
    pub fn announcement(&self) -> &'static str {
        match self.computer {
            Mark::X => r#"Computer moves first! My moves are shown as "X" and yours as "0""#,
            Mark::O => r#"Human moves first! Your moves are shown as "X" and mine as "0""#,
        }
    }
}

/// How a finished game ended, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Outcome {
    /// The human completed a line.
    #[display("Game over. Human wins!")]
    HumanWins,
    /// The computer completed a line.
    #[display("Game over. Human loses!")]
    ComputerWins,
    /// The board filled up without a line.
    #[display("Game over. Draw!")]
    Draw,
}

/// Running totals across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct Scoreboard {
    /// Games finished.
    games: u32,
    /// Games the human won.
    human_wins: u32,
    /// Games the computer won.
    computer_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Counts a finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::HumanWins => self.human_wins += 1,
            Outcome::ComputerWins => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Games played: {}, you won {}, I won {}, draws {}",
            self.games, self.human_wins, self.computer_wins, self.draws
        )
    }
}

/// A console session of one or more games against a computer opponent.
pub struct Session<S, R, W> {
    console: Console<R, W>,
    selector: S,
    config: GameConfig,
    coin: StdRng,
    scoreboard: Scoreboard,
}

impl<S: MoveSelector, R: BufRead, W: Write> Session<S, R, W> {
    /// Creates a session.
    ///
    /// The opening coin flip is seeded from the config seed when present.
    #[instrument(skip(console, selector), fields(selector = selector.name()))]
    pub fn new(console: Console<R, W>, selector: S, config: GameConfig) -> Self {
        let coin = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Self {
            console,
            selector,
            config,
            coin,
            scoreboard: Scoreboard::default(),
        }
    }

    /// Totals so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Consumes the session, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Plays games until the human declines a rematch or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Scoreboard> {
        self.console.say("Welcome to tic tac toe console game!")?;
        self.console
            .say("Once requested, please enter coordinates for your move.")?;

        loop {
            let computer_first = self.config.first_mover().computer_first(&mut self.coin);
            let Some(outcome) = self.play_game(Roles::new(computer_first))? else {
                info!("Input closed mid-game");
                break;
            };
            self.scoreboard.record(outcome);

            let again = self.console.ask("Do you want to play again? (y/n)")?;
            if again.as_deref() != Some("y") {
                break;
            }
        }

        self.console.say(self.scoreboard.to_string())?;
        info!(scoreboard = ?self.scoreboard, "Session finished");
        Ok(self.scoreboard)
    }

    /// Plays one game to a win or a draw.
    ///
    /// Returns `Ok(None)` if input ends before the game does.
    ///
    /// # Errors
    ///
    /// Fails on console I/O errors, and when the board rejects a move as
    /// out of turn.
    #[instrument(skip(self))]
    pub fn play_game(&mut self, roles: Roles) -> Result<Option<Outcome>> {
        let mut board = Board::new();
        self.console.say(roles.announcement())?;

        loop {
            let mark = board.current_turn();

            let coord = if mark == roles.human() {
                match request_move(&mut self.console, board.legal_moves())? {
                    Some(coord) => coord,
                    None => return Ok(None),
                }
            } else {
                let coord = self
                    .selector
                    .select(board.legal_moves())
                    .context("Computer has no legal move")?;
                self.console.say(format!("My move is - {coord}"))?;
                coord
            };

            board
                .apply_move(coord, mark)
                .context("Game aborted: move applied out of turn")?;
            self.console.say(render_board(&board))?;

            let outcome = if board.check_win(mark) {
                if mark == roles.computer() {
                    Outcome::ComputerWins
                } else {
                    Outcome::HumanWins
                }
            } else if board.legal_moves().is_empty() {
                Outcome::Draw
            } else {
                continue;
            };

            debug!(%outcome, moves = board.history().len(), "Game finished");
            self.console.say(outcome.to_string())?;
            return Ok(Some(outcome));
        }
    }
}
