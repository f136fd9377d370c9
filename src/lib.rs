#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod types;
pub mod error;
pub mod cards;
pub mod board;
pub mod state;
pub mod loader;
pub mod render;
pub mod journal;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, Slot};
pub use crate::cards::{Card, CardTable};
pub use crate::engine::apply::apply_move;
pub use crate::engine::score::{evaluate, EvalWeights};
pub use crate::error::{LoadError, MoveError, ValidationError};
pub use crate::journal::DebugJournal;
pub use crate::loader::{gamestate_from_file, gamestate_from_str};
pub use crate::solver::{best_move, best_move_with_observer, minimax, SearchConfig, SearchObserver, SearchResult};
pub use crate::state::{game_over, next_possible_moves, winner, GameState, GameStateBuilder, Hand, Move};
pub use crate::types::{Dir, Outcome, Side};
