//! End-to-end tests for the console session with scripted input.

use std::io::Cursor;
use tictactoe_board::{Coord, FirstAvailable, RandomSelector, Scripted};
use tictactoe_console::{Console, FirstMover, GameConfig, Roles, Session};

fn session_with(
    script: &str,
    selector: Scripted,
    first_mover: FirstMover,
) -> Session<Scripted, Cursor<String>, Vec<u8>> {
    let console = Console::new(Cursor::new(script.to_string()), Vec::new());
    Session::new(console, selector, GameConfig::new(first_mover, Some(0)))
}

fn output<S, R>(session: Session<S, R, Vec<u8>>) -> String
where
    S: tictactoe_board::MoveSelector,
    R: std::io::BufRead,
{
    String::from_utf8(session.into_console().into_writer()).unwrap()
}

#[test]
fn test_human_wins_on_diagonal() {
    // Human X: (1,1) (2,2) (3,3); computer O: (2,1) (3,1)
    let script = "1\n1\n2\n2\n3\n3\nn\n";
    let computer = Scripted::new([Coord::new(1, 0), Coord::new(2, 0)]);
    let mut session = session_with(script, computer, FirstMover::Human);

    let score = session.run().unwrap();

    assert_eq!(*score.games(), 1);
    assert_eq!(*score.human_wins(), 1);
    let out = output(session);
    assert!(out.starts_with("Welcome to tic tac toe console game!"));
    assert!(out.contains("Human moves first!"));
    assert!(out.contains("My move is - row 2, column 1"));
    assert!(out.contains("My move is - row 3, column 1"));
    assert!(out.contains("Game over. Human wins!"));
    assert!(out.contains("Do you want to play again? (y/n)"));
}

#[test]
fn test_computer_wins() {
    // Computer X takes the top row; human O plays the middle row
    let script = "2\n1\n2\n2\nn\n";
    let computer = Scripted::new([Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
    let mut session = session_with(script, computer, FirstMover::Computer);

    let score = session.run().unwrap();

    assert_eq!(*score.computer_wins(), 1);
    let out = output(session);
    assert!(out.contains("Computer moves first!"));
    assert!(out.contains("Game over. Human loses!"));
    assert!(!out.contains("Human wins"));
}

#[test]
fn test_invalid_input_is_reported_and_retried() {
    let script = "one\n5\n1\n1\n1\n1\n2\n2\n3\n3\nn\n";
    let computer = Scripted::new([Coord::new(1, 0), Coord::new(2, 0)]);
    let mut session = session_with(script, computer, FirstMover::Human);

    let score = session.run().unwrap();

    assert_eq!(*score.human_wins(), 1);
    let out = output(session);
    assert!(out.contains("Please enter integer values only"));
    assert!(out.contains("Value is out of range 1 to 3, please try again"));
    assert!(out.contains("the cell is occupied"));
}

#[test]
fn test_draw() {
    // X O X / X O O / O X X with the human as X
    let script = "1\n1\n1\n3\n2\n1\n3\n2\n3\n3\nn\n";
    let computer = Scripted::new([
        Coord::new(0, 1),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 0),
    ]);
    let mut session = session_with(script, computer, FirstMover::Human);

    let score = session.run().unwrap();

    assert_eq!(*score.draws(), 1);
    assert!(output(session).contains("Game over. Draw!"));
}

#[test]
fn test_replay_only_on_exact_y() {
    let game = "1\n1\n2\n2\n3\n3\n";
    let script = format!("{game}y\n{game}yes\n{game}");
    let computer = Scripted::new([
        Coord::new(1, 0),
        Coord::new(2, 0),
        Coord::new(1, 0),
        Coord::new(2, 0),
    ]);
    let mut session = session_with(&script, computer, FirstMover::Human);

    let score = session.run().unwrap();

    assert_eq!(*score.games(), 2);
    assert_eq!(*score.human_wins(), 2);
}

#[test]
fn test_input_closed_mid_game() {
    let mut session = session_with("1\n1\n", Scripted::default(), FirstMover::Human);

    let score = session.run().unwrap();

    assert_eq!(*score.games(), 0);
}

#[test]
fn test_play_game_rendering() {
    let console = Console::new(Cursor::new(String::new()), Vec::new());
    let mut session = Session::new(console, FirstAvailable, GameConfig::default());

    // Computer plays X with first-available; input is empty so the game
    // stops at the human's first turn.
    let outcome = session.play_game(Roles::new(true)).unwrap();

    assert_eq!(outcome, None);
    let out = String::from_utf8(session.into_console().into_writer()).unwrap();
    assert!(out.contains("My move is - row 1, column 1"));
    assert!(out.contains("│ X │ _ │ _ │"));
}

#[test]
fn test_random_opponent_games_finish() {
    for seed in 0..20u64 {
        let human_moves: String = (1..=3)
            .flat_map(|r| (1..=3).map(move |c| format!("{r}\n{c}\n")))
            .collect::<Vec<_>>()
            .concat();
        let console = Console::new(Cursor::new(human_moves), Vec::new());
        let config = GameConfig::new(FirstMover::Random, Some(seed));
        let mut session = Session::new(console, RandomSelector::seeded(seed), config);

        let score = session.run().unwrap();

        // Typing every cell in order always reaches a free one before the
        // script runs out, so the game always finishes.
        assert_eq!(*score.games(), 1, "seed {seed}");
        assert_eq!(
            score.human_wins() + score.computer_wins() + score.draws(),
            1
        );
    }
}
