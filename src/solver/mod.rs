use crate::engine::score::EvalWeights;
use crate::state::{GameState, Move};

pub mod minimax;

pub use minimax::{best_move, best_move_with_observer, minimax};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Plies searched below the root, counting the root move as ply 1.
    /// `0` searches to the end of the game.
    pub max_depth: u8,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    #[inline]
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// `None` when the root has no legal move.
    pub best_move: Option<Move>,
    /// Score of `best_move` for the side to move at the root; `-inf` without a move.
    pub score: f64,
    /// Number of states visited below the root.
    pub nodes: u64,
    pub max_depth: u8,
}

/// Receives search events. All callbacks default to doing nothing.
pub trait SearchObserver {
    /// A root move was applied and scored. `after` is the state following the move.
    fn on_root_move(&mut self, _after: &GameState, _mv: Move, _score: f64) {}

    fn on_search_complete(&mut self, _root: &GameState, _result: &SearchResult) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
