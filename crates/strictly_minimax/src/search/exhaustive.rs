//! Plain minimax without pruning.
//!
//! Walks the whole game tree below a board. Used as the reference the
//! pruned engine must agree with, and to list every optimal move.

use super::mode::SearchMode;
use crate::{Board, Move};
use tracing::instrument;

/// Game value of `board` under optimal play from both sides.
#[instrument(level = "trace", skip(board))]
pub fn minimax_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    let mode = SearchMode::for_player(board.turn());
    children(board).fold(mode.worst(), |best, (_, child)| {
        let value = minimax_value(&child);
        if mode.improves(value, best) { value } else { best }
    })
}

/// Every move from `board` that achieves its game value, in row-major order.
///
/// Empty when the board is terminal.
#[instrument(skip(board))]
pub fn optimal_moves(board: &Board) -> Vec<Move> {
    if board.is_terminal() {
        return Vec::new();
    }

    let target = minimax_value(board);
    children(board)
        .filter(|(_, child)| minimax_value(child) == target)
        .map(|(mv, _)| mv)
        .collect()
}

fn children(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    board.legal_moves().into_iter().map(move |mv| {
        let child = board
            .apply(mv)
            .expect("legal move generation yields only empty on-board cells");
        (mv, child)
    })
}
