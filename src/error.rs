use thiserror::Error;

use crate::types::Side;

/// A move that cannot be applied to the current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Position {0} is out of range (must be 1..=9)")]
    PositionOutOfRange(u8),

    #[error("Position {0} is already occupied")]
    PositionOccupied(u8),

    #[error("Card id {card_id} is not in {side}'s hand")]
    CardNotInHand { card_id: u16, side: Side },

    #[error("Card id {0} does not exist in this game")]
    UnknownCard(u16),
}

/// Malformed game input, rejected before any state is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required key '{0}'")]
    MissingKey(&'static str),

    #[error("Missing required key '{field}' for card #{index}")]
    MissingCardField { index: usize, field: &'static str },

    #[error("Invalid current player '{0}' (expected P or O)")]
    InvalidCurrentPlayer(String),

    #[error("Invalid owner '{owner}' for card '{symbol}' (expected P or O)")]
    InvalidOwner { symbol: String, owner: String },

    #[error("Card '{symbol}' has invalid side values {values:?} (must be 1..=10)")]
    InvalidStrength { symbol: String, values: [i64; 4] },

    #[error("Invalid position for card '{symbol}': {position}")]
    InvalidPosition { symbol: String, position: String },

    #[error("Card #{0} has an empty symbol")]
    EmptySymbol(usize),

    #[error("Duplicate card symbol '{0}'")]
    DuplicateSymbol(String),

    #[error("Position {position} is taken by both '{first}' and '{second}'")]
    DuplicatePosition {
        position: u8,
        first: String,
        second: String,
    },

    #[error("Too many cards ({0}, at most {max})", max = u16::MAX)]
    TooManyCards(usize),
}

/// Anything that can go wrong while reading a game-state file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read game state: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse game state JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid game state: {0}")]
    Invalid(#[from] ValidationError),
}
