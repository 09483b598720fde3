//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Once;
use strictly_minimax::Board;

static TRACING: Once = Once::new();

/// Installs a tracing subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Every board reachable from the initial board through legal play.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if board.is_terminal() {
            continue;
        }
        for mv in board.legal_moves() {
            stack.push(board.apply(mv).expect("legal move"));
        }
    }

    boards
}

/// Parses a board literal.
pub fn board(text: &str) -> Board {
    text.parse().expect("valid board literal")
}
