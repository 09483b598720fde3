//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board according to tic-tac-toe rules.
//! Rules are kept apart from board storage so the search engine and the
//! board queries share one definition of "won" and "full".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
