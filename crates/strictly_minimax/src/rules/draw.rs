//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board with no winner.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().apply(Move::CENTER).expect("legal");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().expect("valid");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X completes the top row.
        let board: Board = "XXX/OOX/XOO".parse().expect("valid");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
