//! Exact play for tic-tac-toe.
//!
//! A pure board model plus a full-depth minimax engine with alpha-beta
//! pruning. The game tree is small enough to solve exactly, so there is
//! no heuristic evaluation.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 value with turn, legal move, transition,
//!   winner, terminal and utility queries
//! - **Rules**: line table and win/draw detection shared by the board
//! - **Search**: the alpha-beta engine and its unpruned reference
//! - **Config**: pruning and move-order settings, loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Move, best_move};
//!
//! # fn main() -> Result<(), strictly_minimax::IllegalMoveError> {
//! let board = Board::from_moves(&[Move::new(0, 0), Move::CENTER, Move::new(0, 1)])?;
//! // O has to block the top row.
//! assert_eq!(best_move(&board), Some(Move::new(0, 2)));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
pub mod rules;
pub mod search;
mod types;

pub use board::Board;
pub use config::{MoveOrder, SearchConfig};
pub use error::{ConfigError, IllegalMoveError, ParseBoardError};
pub use search::{
    Engine, SearchMode, SearchReport, SearchStats, Window, best_move, minimax_value, optimal_moves,
};
pub use types::{Cell, Move, Outcome, Player};
