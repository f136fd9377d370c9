use tracing::debug;

use crate::engine::score::{evaluate, EvalWeights};
use crate::state::GameState;
use crate::types::Side;

use super::{NoopObserver, SearchConfig, SearchObserver, SearchResult};

/// Plain minimax without pruning.
///
/// Conventions:
/// - Values are always from `perspective`'s point of view.
/// - `maximizing` alternates with ply depth only; it is not derived from the
///   side to move.
/// - Cutoff at `depth == max_depth`, at game over, or when the side to move
///   has no cards left; the cutoff value is `evaluate(state, perspective)`.
///   Depth starts at 1 below the root, so `max_depth == 0` never cuts off and
///   the search runs to the end of the game.
///
/// `nodes` is incremented once per visited state.
pub fn minimax(
    state: &GameState,
    maximizing: bool,
    depth: u8,
    max_depth: u8,
    perspective: Side,
    weights: &EvalWeights,
    nodes: &mut u64,
) -> f64 {
    *nodes += 1;
    if state.game_over() || depth == max_depth {
        return evaluate(state, perspective, weights);
    }

    let moves = state.next_possible_moves();
    if moves.is_empty() {
        return evaluate(state, perspective, weights);
    }

    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for mv in moves {
        let mut child = state.clone();
        if child.apply_move(mv).is_err() {
            // next_possible_moves only yields playable moves
            continue;
        }
        let value = minimax(&child, !maximizing, depth + 1, max_depth, perspective, weights, nodes);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Best move for the side to move, without observing the search.
pub fn best_move(state: &GameState, config: &SearchConfig) -> SearchResult {
    best_move_with_observer(state, config, &mut NoopObserver)
}

/// Score every root move with [`minimax`] and keep the first one with the
/// strictly highest score.
pub fn best_move_with_observer(
    state: &GameState,
    config: &SearchConfig,
    observer: &mut dyn SearchObserver,
) -> SearchResult {
    let perspective = state.current_player();
    let mut result = SearchResult {
        best_move: None,
        score: f64::NEG_INFINITY,
        nodes: 0,
        max_depth: config.max_depth,
    };

    for mv in state.next_possible_moves() {
        let mut child = state.clone();
        if child.apply_move(mv).is_err() {
            continue;
        }
        let score = minimax(
            &child,
            true,
            1,
            config.max_depth,
            perspective,
            &config.weights,
            &mut result.nodes,
        );
        debug!(
            card = mv.card_id,
            position = mv.position,
            score,
            "root move scored"
        );
        observer.on_root_move(&child, mv, score);

        if score > result.score {
            result.score = score;
            result.best_move = Some(mv);
        }
    }

    debug!(
        side = %perspective,
        max_depth = config.max_depth,
        nodes = result.nodes,
        score = result.score,
        found = result.best_move.is_some(),
        "search complete"
    );
    observer.on_search_complete(state, &result);
    result
}
