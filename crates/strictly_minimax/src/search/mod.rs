//! Game-tree search.
//!
//! - [`alphabeta`]: the engine, exhaustive minimax pruned with alpha-beta bounds
//! - [`exhaustive`]: unpruned reference minimax
//! - [`mode`]: the maximizer/minimizer duality shared by both

pub mod alphabeta;
pub mod exhaustive;
pub mod mode;

pub use alphabeta::{Engine, SearchReport, SearchStats, best_move};
pub use exhaustive::{minimax_value, optimal_moves};
pub use mode::{SearchMode, Window};
