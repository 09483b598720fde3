//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Move, Player};
use tracing::instrument;

/// The eight winning lines in scan order: rows, columns, main diagonal,
/// anti-diagonal.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// Returns true if `player` holds every cell of some line.
#[instrument(level = "trace", skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&mv| board.get(mv) == Some(Cell::Mark(player))))
}

/// Checks if there is a winner on the board.
///
/// X is checked before O, so a board where both hold a line (unreachable
/// through legal play) reports X.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_line(board, player))
}
