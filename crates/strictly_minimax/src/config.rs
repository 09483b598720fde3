//! Search configuration.

use crate::{Board, ConfigError, Move};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Order in which the engine tries moves at each node.
///
/// Only the tie-break among equally good moves and the amount of pruning
/// depend on the order; the game value never does.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrder {
    /// Row-major: (0,0), (0,1), ... (2,2).
    #[default]
    RowMajor,
    /// Center, then corners, then edges; row-major within each group.
    CenterFirst,
}

const CENTER_FIRST: [Move; 9] = [
    Move::new(1, 1),
    Move::new(0, 0),
    Move::new(0, 2),
    Move::new(2, 0),
    Move::new(2, 2),
    Move::new(0, 1),
    Move::new(1, 0),
    Move::new(1, 2),
    Move::new(2, 1),
];

impl MoveOrder {
    /// All nine cells in this order.
    pub fn sequence(self) -> &'static [Move; 9] {
        match self {
            MoveOrder::RowMajor => &Move::ALL,
            MoveOrder::CenterFirst => &CENTER_FIRST,
        }
    }

    /// Legal moves on `board` in this order.
    pub fn legal_moves(self, board: &Board) -> impl Iterator<Item = Move> + '_ {
        self.sequence()
            .iter()
            .copied()
            .filter(|&mv| board.get(mv).is_some_and(|cell| cell.is_empty()))
    }
}

/// Configuration for the search engine.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SearchConfig {
    /// Cut off subtrees that cannot affect the result.
    pruning: bool,

    /// Move ordering at every node.
    move_order: MoveOrder,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            move_order: MoveOrder::default(),
        }
    }
}

impl SearchConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Parsed search config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!(pruning = config.pruning, move_order = ?config.move_order, "Config loaded successfully");
        Ok(config)
    }
}
