//! Full-depth minimax with alpha-beta pruning.

use super::mode::{SearchMode, Window};
use crate::{Board, Move, SearchConfig};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    nodes: u64,
    /// Times the remaining moves of a node were skipped.
    cutoffs: u64,
}

/// Result of searching a non-terminal board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchReport {
    /// Optimal move for the side to act.
    best_move: Move,
    /// Game value under optimal play from both sides (+1 X wins, -1 O wins, 0 draw).
    value: i32,
    /// Search cost.
    stats: SearchStats,
}

/// Exact game solver.
///
/// Among equally good moves the first one in the configured move order is
/// returned, since the running best is replaced only on strict improvement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Engine {
    config: SearchConfig,
}

impl Engine {
    /// Creates an engine with the given configuration.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the optimal move for the side to act, or `None` if the game is over.
    #[instrument(skip(self, board), fields(turn = %board.turn()))]
    pub fn best_move(&self, board: &Board) -> Option<Move> {
        self.search(board).map(|report| report.best_move)
    }

    /// Searches `board` to the end of the game.
    ///
    /// Returns `None` if the board is terminal. The board must satisfy the
    /// reachability invariant; it is not validated.
    #[instrument(skip(self, board), fields(turn = %board.turn(), filled = board.filled()))]
    pub fn search(&self, board: &Board) -> Option<SearchReport> {
        if board.is_terminal() {
            debug!("Board is terminal, no move to search");
            return None;
        }

        let mode = SearchMode::for_player(board.turn());
        let mut stats = SearchStats::default();
        let (best_move, value) = self.node_value(board, mode, Window::FULL, &mut stats);
        let best_move = best_move?;

        debug!(
            %best_move,
            value,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "Search complete"
        );
        Some(SearchReport {
            best_move,
            value,
            stats,
        })
    }

    /// Value of `board` for a node in `mode`, with the move that achieves it.
    ///
    /// The move is `None` only at terminal nodes.
    fn node_value(
        &self,
        board: &Board,
        mode: SearchMode,
        mut window: Window,
        stats: &mut SearchStats,
    ) -> (Option<Move>, i32) {
        stats.nodes += 1;

        if board.is_terminal() {
            return (None, board.utility());
        }

        let mut best_move = None;
        let mut best_value = mode.worst();

        for mv in self.config.move_order().legal_moves(board) {
            let child = board
                .apply(mv)
                .expect("legal move generation yields only empty on-board cells");
            let (_, value) = self.node_value(&child, mode.opponent(), window, stats);

            if mode.improves(value, best_value) {
                best_move = Some(mv);
                best_value = value;
            }

            if *self.config.pruning() && mode.cuts_off(best_value, window) {
                stats.cutoffs += 1;
                trace!(?mode, %mv, best_value, ?window, "Cutoff");
                break;
            }

            window = mode.tighten(window, best_value);
        }

        (best_move, best_value)
    }
}

/// Returns the optimal move with the default configuration
/// (pruning on, row-major move order).
pub fn best_move(board: &Board) -> Option<Move> {
    Engine::default().best_move(board)
}
