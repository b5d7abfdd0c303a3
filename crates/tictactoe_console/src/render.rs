//! Box-drawn rendering of the board.

use tictactoe_board::{Board, Cell, SIZE};
use tracing::instrument;

const TOP: (&str, &str, &str) = ("╒", "╤", "╕");
const MIDDLE: (&str, &str, &str) = ("├", "┼", "┤");
const BOTTOM: (&str, &str, &str) = ("╘", "╧", "╛");

fn rule(fill: &str, (left, join, right): (&str, &str, &str)) -> String {
    let segment = fill.repeat(3);
    let inner = vec![segment; SIZE].join(join);
    format!("{left}{inner}{right}")
}

fn row_line(cells: &[Cell; SIZE]) -> String {
    let glyphs: Vec<String> = cells.iter().map(|c| format!(" {} ", c.glyph())).collect();
    format!("│{}│", glyphs.join("│"))
}

/// Renders the grid, one printed row per board row.
///
/// ```text
/// ╒═══╤═══╤═══╕
/// │ X │ _ │ _ │
/// ├───┼───┼───┤
/// │ _ │ 0 │ _ │
/// ├───┼───┼───┤
/// │ _ │ _ │ _ │
/// ╘═══╧═══╧═══╛
/// ```
#[instrument(skip(board))]
pub fn render_board(board: &Board) -> String {
    let mut lines = vec![rule("═", TOP)];
    for (i, row) in board.rows().iter().enumerate() {
        if i > 0 {
            lines.push(rule("─", MIDDLE));
        }
        lines.push(row_line(row));
    }
    lines.push(rule("═", BOTTOM));
    lines.join("\n")
}
