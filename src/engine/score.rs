use serde::{Deserialize, Serialize};

use crate::state::GameState;
use crate::types::{Side, CORNERS, EDGES};

/// Weights of the heuristic terms added on top of the point differential.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Multiplier for corner/edge ownership.
    pub positional: f64,
    /// Multiplier for the strength still held in hand.
    pub hand_power: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            positional: 0.1,
            hand_power: 0.1,
        }
    }
}

impl EvalWeights {
    #[inline]
    pub const fn new(positional: f64, hand_power: f64) -> Self {
        Self {
            positional,
            hand_power,
        }
    }

    /// Point differential only.
    #[inline]
    pub const fn score_only() -> Self {
        Self {
            positional: 0.0,
            hand_power: 0.0,
        }
    }
}

/// Corners count 1/9 each, edge midpoints 1/18; the centre counts nothing.
#[allow(clippy::cast_precision_loss)] // counts are at most 4
fn positional_term(state: &GameState, side: Side) -> f64 {
    let owned = |pos: &&u8| state.board().get(**pos).is_some_and(|s| s.owner == side);
    let corners = CORNERS.iter().filter(owned).count() as f64;
    let edges = EDGES.iter().filter(owned).count() as f64;
    corners / 9.0 + edges / 18.0
}

fn hand_power_term(state: &GameState, side: Side) -> f64 {
    state
        .hand(side)
        .iter()
        .filter_map(|id| state.card(id))
        .map(|c| f64::from(c.total_power()) / 40.0 / 9.0)
        .sum()
}

/// Score `state` from `side`'s point of view. Used unchanged at every cutoff,
/// terminal or not.
pub fn evaluate(state: &GameState, side: Side, weights: &EvalWeights) -> f64 {
    let differential = f64::from(state.score(side) - state.score(side.other()));
    differential
        + positional_term(state, side) * weights.positional
        + hand_power_term(state, side) * weights.hand_power
}
