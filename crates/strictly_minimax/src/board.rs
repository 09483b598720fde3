//! The immutable 3x3 board and its pure queries.

use crate::rules::{check_winner, is_full};
use crate::{Cell, IllegalMoveError, Move, Outcome, ParseBoardError, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// A plain value: every transition returns a new board and leaves the
/// receiver untouched. Boards built with [`Board::new`], [`Board::apply`]
/// or [`Board::from_moves`] always satisfy the reachability invariant
/// (X has as many marks as O, or one more).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates the initial empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from raw cells in row-major order.
    ///
    /// The reachability invariant is not checked. Queries and search on a
    /// board that could not arise from legal play give unspecified results.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Replays a move sequence from the initial board.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMoveError`] encountered.
    #[instrument(skip(moves), fields(len = moves.len()))]
    pub fn from_moves(moves: &[Move]) -> Result<Self, IllegalMoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |board, &mv| board.apply(mv))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Gets the cell at the given move's coordinates, `None` when off the board.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|i| self.cells[i])
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Mark(player))
            .count()
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns the player to move next.
    ///
    /// X moves when both players have the same number of marks, O when X is
    /// ahead.
    #[instrument(level = "trace", skip(self))]
    pub fn turn(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Returns every empty cell as a move, in row-major order.
    ///
    /// Empty when the board is full.
    #[instrument(level = "trace", skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|&mv| self.get(mv) == Some(Cell::Empty))
            .collect()
    }

    /// Returns the board after the player to move marks `mv`.
    ///
    /// # Errors
    ///
    /// - [`IllegalMoveError::OutOfBounds`] if a coordinate is outside `[0, 3)`.
    /// - [`IllegalMoveError::Occupied`] if the target cell already holds a mark.
    #[instrument(level = "trace", skip(self), fields(player = %self.turn()))]
    pub fn apply(&self, mv: Move) -> Result<Board, IllegalMoveError> {
        let index = mv.index().ok_or(IllegalMoveError::OutOfBounds {
            row: mv.row(),
            col: mv.col(),
        })?;

        if !self.cells[index].is_empty() {
            return Err(IllegalMoveError::Occupied(mv));
        }

        let mut next = *self;
        next.cells[index] = Cell::Mark(self.turn());
        Ok(next)
    }

    /// Returns the player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self)
    }

    /// Returns true if every cell is marked.
    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    /// Returns true if someone has won or the board is full.
    #[instrument(level = "trace", skip(self))]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Scores the board from X's point of view: +1 X won, -1 O won, 0 otherwise.
    ///
    /// Total, but only meaningful on terminal boards: an unfinished board
    /// with no line scores 0, same as a draw.
    #[instrument(level = "trace", skip(self))]
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Classifies the board as won, drawn or still in play.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Winner(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Ongoing,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            writeln!(f, "{}|{}|{}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells: `X`/`x`, `O`/`o`, and `.` or `_` for empty.
    /// Separators (`|`, `/`, `+`, `-`) and whitespace are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;

        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Mark(Player::X),
                'O' | 'o' => Cell::Mark(Player::O),
                '.' | '_' => Cell::Empty,
                '|' | '/' | '+' | '-' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::InvalidCell(c)),
            };
            if let Some(slot) = cells.get_mut(count) {
                *slot = cell;
            }
            count += 1;
        }

        if count != 9 {
            return Err(ParseBoardError::WrongCellCount(count));
        }
        Ok(Self { cells })
    }
}
