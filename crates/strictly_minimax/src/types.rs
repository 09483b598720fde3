//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    #[display("X")]
    X,
    /// Player O (goes second, minimizes utility).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
///
/// Emptiness is its own variant so that "no mark here" is never confused
/// with "no move returned" (`Option<Move>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Mark(Player),
}

impl Cell {
    /// Returns true if the cell has no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(player),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Mark(player) => write!(f, "{}", player),
        }
    }
}

/// A move: zero-based `(row, col)` coordinates.
///
/// Coordinates are not range-checked on construction; `Board::apply`
/// rejects anything outside `[0, 3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Every on-board move in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// The center cell.
    pub const CENTER: Move = Move::new(1, 1);

    /// The four corner cells in row-major order.
    pub const CORNERS: [Move; 4] = [
        Move::new(0, 0),
        Move::new(0, 2),
        Move::new(2, 0),
        Move::new(2, 2),
    ];

    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }

    /// Returns the row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns true if both coordinates are in `[0, 3)`.
    pub fn in_bounds(&self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major index (0-8), or `None` when off the board.
    pub fn index(&self) -> Option<usize> {
        self.in_bounds().then_some(self.row * 3 + self.col)
    }

    /// Returns true for the four corner cells.
    pub fn is_corner(&self) -> bool {
        Self::CORNERS.contains(self)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a game position. Derived from a board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Game is ongoing.
    #[display("ongoing")]
    Ongoing,
    /// Game ended in a win.
    #[display("{} wins", _0)]
    Winner(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}
