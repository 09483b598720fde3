//! The maximizing/minimizing duality of minimax.
//!
//! X maximizes utility and O minimizes it. Everything that differs between
//! the two kinds of node lives here, so the search itself is written once.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Which side of the duality a search node is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum SearchMode {
    /// Node where X moves: prefers larger utilities.
    Maximizing,
    /// Node where O moves: prefers smaller utilities.
    Minimizing,
}

/// Alpha-beta bounds for one node.
///
/// `alpha` is the value the maximizer is already guaranteed, `beta` the
/// value the minimizer is already guaranteed. Each node owns its window by
/// value; children receive a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Lower bound.
    pub alpha: i32,
    /// Upper bound.
    pub beta: i32,
}

impl Window {
    /// The unbounded window, (-infinity, +infinity).
    pub const FULL: Window = Window {
        alpha: i32::MIN,
        beta: i32::MAX,
    };
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}

impl SearchMode {
    /// Mode for the node where `player` is to move.
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::X => SearchMode::Maximizing,
            Player::O => SearchMode::Minimizing,
        }
    }

    /// Mode of the children of a node in this mode.
    pub fn opponent(self) -> Self {
        match self {
            SearchMode::Maximizing => SearchMode::Minimizing,
            SearchMode::Minimizing => SearchMode::Maximizing,
        }
    }

    /// Starting value of the running best: -infinity or +infinity.
    pub fn worst(self) -> i32 {
        match self {
            SearchMode::Maximizing => i32::MIN,
            SearchMode::Minimizing => i32::MAX,
        }
    }

    /// True if `candidate` is strictly better than `best` for this side.
    pub fn improves(self, candidate: i32, best: i32) -> bool {
        match self {
            SearchMode::Maximizing => candidate > best,
            SearchMode::Minimizing => candidate < best,
        }
    }

    /// True if the remaining siblings of a node whose running best is
    /// `best` cannot change its parent's choice.
    pub fn cuts_off(self, best: i32, window: Window) -> bool {
        match self {
            SearchMode::Maximizing => best >= window.beta,
            SearchMode::Minimizing => best <= window.alpha,
        }
    }

    /// Narrows this side's bound to `best` when it is an improvement.
    pub fn tighten(self, window: Window, best: i32) -> Window {
        match self {
            SearchMode::Maximizing if best > window.alpha => Window {
                alpha: best,
                ..window
            },
            SearchMode::Minimizing if best < window.beta => Window {
                beta: best,
                ..window
            },
            _ => window,
        }
    }
}
