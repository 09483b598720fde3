//! End-to-end tests for the alpha-beta engine.

mod common;

use common::{board, init_tracing, reachable_boards};
use strictly_minimax::{
    Board, Engine, Move, MoveOrder, SearchConfig, best_move, minimax_value, optimal_moves,
};
use strum::IntoEnumIterator;

/// Every engine configuration worth checking.
fn engines() -> Vec<Engine> {
    let mut engines = Vec::new();
    for order in MoveOrder::iter() {
        for pruning in [true, false] {
            engines.push(Engine::new(
                SearchConfig::default()
                    .with_pruning(pruning)
                    .with_move_order(order),
            ));
        }
    }
    engines
}

#[test]
fn test_opening_move_is_corner_or_center() {
    init_tracing();
    for engine in engines() {
        let report = engine.search(&Board::new()).expect("not terminal");
        let mv = *report.best_move();
        assert!(mv == Move::CENTER || mv.is_corner(), "unexpected opening {mv}");
        assert_eq!(*report.value(), 0);
    }
}

#[test]
fn test_takes_the_winning_cell() {
    init_tracing();
    let board = board("XX./OO./...");
    for engine in engines() {
        let report = engine.search(&board).expect("not terminal");
        assert_eq!(*report.best_move(), Move::new(0, 2));
        assert_eq!(*report.value(), 1);
        let after = board.apply(*report.best_move()).expect("legal move");
        assert_eq!(after.utility(), 1);
    }
}

#[test]
fn test_blocks_the_only_threat() {
    // X threatens the top row; every O move except the block loses.
    let board = board("XX./.O./...");
    assert_eq!(optimal_moves(&board), vec![Move::new(0, 2)]);
    for engine in engines() {
        assert_eq!(engine.best_move(&board), Some(Move::new(0, 2)));
    }
}

#[test]
fn test_answers_opposite_corners_with_an_edge() {
    // Taking a corner here lets X fork; only the edges hold the draw.
    let board = board("X../.O./..X");
    let edges = [Move::new(0, 1), Move::new(1, 0), Move::new(1, 2), Move::new(2, 1)];
    assert_eq!(optimal_moves(&board), edges.to_vec());
    for engine in engines() {
        let mv = engine.best_move(&board).expect("not terminal");
        assert!(edges.contains(&mv), "{mv} loses");
    }
}

#[test]
fn test_full_board_gets_no_move() {
    let board = board("XOX/XOO/OXX");
    assert!(board.is_terminal());
    assert_eq!(board.winner(), None);
    assert_eq!(board.utility(), 0);
    assert_eq!(best_move(&board), None);
}

#[test]
fn test_pruning_never_changes_the_value() {
    init_tracing();
    let pruned = Engine::default();
    let reorder = Engine::new(SearchConfig::default().with_move_order(MoveOrder::CenterFirst));

    for board in reachable_boards() {
        if board.is_terminal() {
            assert_eq!(pruned.search(&board), None);
            continue;
        }

        let value = minimax_value(&board);
        let optimal = optimal_moves(&board);
        for engine in [pruned, reorder] {
            let report = engine.search(&board).expect("not terminal");
            assert_eq!(*report.value(), value, "wrong value for\n{board}");
            assert!(
                optimal.contains(report.best_move()),
                "{} is not optimal for\n{board}",
                report.best_move()
            );
            let child = board.apply(*report.best_move()).expect("legal move");
            assert_eq!(minimax_value(&child), value);
        }
    }
}

#[test]
fn test_row_major_picks_first_optimal_move() {
    let engine = Engine::default();
    for board in reachable_boards().into_iter().filter(|b| !b.is_terminal()) {
        let first = optimal_moves(&board)[0];
        assert_eq!(engine.best_move(&board), Some(first), "tie-break on\n{board}");
    }
}

#[test]
fn test_search_does_not_touch_the_board() {
    let board = board("X../.O./...");
    let before = board;
    let first = best_move(&board);
    assert_eq!(board, before);
    assert_eq!(best_move(&board), first);
}

#[test]
fn test_perfect_self_play_draws() {
    for engine in engines() {
        let mut board = Board::new();
        while let Some(mv) = engine.best_move(&board) {
            board = board.apply(mv).expect("engine plays legal moves");
        }
        assert!(board.is_full());
        assert_eq!(board.winner(), None);
    }
}
