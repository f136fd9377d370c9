//! JSON game-state files.
//!
//! ```json
//! {
//!   "current_player": "P",
//!   "cards": [
//!     { "symbol": "A", "owner": "P", "top": 5, "left": 3, "right": 7, "bottom": 2, "position": "Hand" },
//!     { "symbol": "F", "owner": "O", "top": 1, "left": 4, "right": 6, "bottom": 8, "position": 5 }
//!   ]
//! }
//! ```
//!
//! Card order is kept as the dealing order of each hand.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::cards::Card;
use crate::error::{LoadError, ValidationError};
use crate::state::{GameState, GameStateBuilder};
use crate::types::Side;

// Everything is optional or loosely typed so that missing keys and bad
// values surface as ValidationError rather than as a serde message.
#[derive(Debug, Deserialize)]
struct RawGameState {
    current_player: Option<String>,
    cards: Option<Vec<RawCard>>,
}

#[derive(Debug, Deserialize)]
struct RawCard {
    symbol: Option<String>,
    owner: Option<String>,
    top: Option<i64>,
    left: Option<i64>,
    right: Option<i64>,
    bottom: Option<i64>,
    position: Option<RawPosition>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPosition {
    Cell(i64),
    Label(String),
}

enum Placement {
    Hand,
    Board(u8),
}

fn parse_side(s: &str) -> Option<Side> {
    Side::from_tag(s.trim())
}

fn strength(v: i64) -> Option<u8> {
    u8::try_from(v).ok().filter(|x| (1..=10).contains(x))
}

fn parse_placement(symbol: &str, raw: &RawPosition) -> Result<Placement, ValidationError> {
    let invalid = |position: String| ValidationError::InvalidPosition {
        symbol: symbol.to_string(),
        position,
    };
    match raw {
        RawPosition::Label(s) if s == "Hand" => Ok(Placement::Hand),
        RawPosition::Label(s) => Err(invalid(s.clone())),
        RawPosition::Cell(n) => u8::try_from(*n)
            .ok()
            .filter(|p| (1..=9).contains(p))
            .map(Placement::Board)
            .ok_or_else(|| invalid(n.to_string())),
    }
}

fn add_card(
    builder: &mut GameStateBuilder,
    index: usize,
    raw: RawCard,
) -> Result<(), ValidationError> {
    let missing = |field| ValidationError::MissingCardField { index, field };

    let symbol = raw.symbol.ok_or_else(|| missing("symbol"))?;
    let owner = raw.owner.ok_or_else(|| missing("owner"))?;
    let top = raw.top.ok_or_else(|| missing("top"))?;
    let left = raw.left.ok_or_else(|| missing("left"))?;
    let right = raw.right.ok_or_else(|| missing("right"))?;
    let bottom = raw.bottom.ok_or_else(|| missing("bottom"))?;
    let position = raw.position.ok_or_else(|| missing("position"))?;

    if symbol.trim().is_empty() {
        return Err(ValidationError::EmptySymbol(index));
    }
    let owner = parse_side(&owner).ok_or_else(|| ValidationError::InvalidOwner {
        symbol: symbol.clone(),
        owner: owner.clone(),
    })?;

    let (Some(t), Some(l), Some(r), Some(b)) =
        (strength(top), strength(left), strength(right), strength(bottom))
    else {
        return Err(ValidationError::InvalidStrength {
            symbol,
            values: [top, left, right, bottom],
        });
    };

    let placement = parse_placement(&symbol, &position)?;
    let card = Card::new(symbol, t, l, r, b)?;
    match placement {
        Placement::Hand => builder.hand_card(owner, card)?,
        Placement::Board(pos) => builder.board_card(owner, card, pos)?,
    };
    Ok(())
}

/// Parse and validate a game state from JSON text.
pub fn gamestate_from_str(json: &str) -> Result<GameState, LoadError> {
    let raw: RawGameState = serde_json::from_str(json)?;

    let current = raw
        .current_player
        .ok_or(ValidationError::MissingKey("current_player"))?;
    let current = parse_side(&current).ok_or(ValidationError::InvalidCurrentPlayer(current))?;
    let cards = raw.cards.ok_or(ValidationError::MissingKey("cards"))?;

    let mut builder = GameState::builder(current);
    for (index, card) in cards.into_iter().enumerate() {
        add_card(&mut builder, index, card)?;
    }
    let state = builder.build();
    debug!(
        cards = state.cards().len(),
        filled = state.board().filled_count(),
        current = %state.current_player(),
        "game state loaded"
    );
    Ok(state)
}

/// Load a game state from a JSON file.
pub fn gamestate_from_file<P: AsRef<Path>>(path: P) -> Result<GameState, LoadError> {
    let data = fs::read_to_string(path.as_ref())?;
    gamestate_from_str(&data)
}
