use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Strength profile of a single card. Ownership is tracked by the board slot
/// or hand holding the card, never on the profile itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub symbol: String,
    pub top: u8,
    pub left: u8,
    pub right: u8,
    pub bottom: u8,
}

impl Card {
    /// Build a card, checking every side is within 1..=10.
    pub fn new(
        symbol: impl Into<String>,
        top: u8,
        left: u8,
        right: u8,
        bottom: u8,
    ) -> Result<Self, ValidationError> {
        let card = Self {
            symbol: symbol.into(),
            top,
            left,
            right,
            bottom,
        };
        validate_card(&card)?;
        Ok(card)
    }

    /// Sides in [above, below, left, right] order, matching `Dir::index`.
    #[inline]
    pub fn sides(&self) -> [u8; 4] {
        [self.top, self.bottom, self.left, self.right]
    }

    #[inline]
    pub fn total_power(&self) -> u32 {
        u32::from(self.top) + u32::from(self.left) + u32::from(self.right) + u32::from(self.bottom)
    }
}

fn validate_card(card: &Card) -> Result<(), ValidationError> {
    let within = |v: u8| (1..=10).contains(&v);
    if !(within(card.top) && within(card.left) && within(card.right) && within(card.bottom)) {
        return Err(ValidationError::InvalidStrength {
            symbol: card.symbol.clone(),
            values: [card.top, card.left, card.right, card.bottom].map(i64::from),
        });
    }
    Ok(())
}

/// Immutable table of every card in one game, indexed by dense card id.
#[derive(Debug, Default, Clone)]
pub struct CardTable {
    by_id: Vec<Card>,
    symbol_to_id: HashMap<String, u16>,
}

impl CardTable {
    #[inline]
    pub fn get(&self, id: u16) -> Option<&Card> {
        self.by_id.get(id as usize)
    }

    #[inline]
    pub fn id_by_symbol(&self, symbol: &str) -> Option<u16> {
        self.symbol_to_id.get(symbol).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (u16, &Card)> {
        // ids are dense and insert() caps the table at u16::MAX entries
        self.by_id.iter().enumerate().map(|(i, c)| (i as u16, c))
    }

    /// Register a card and return its id. Symbols must be unique.
    pub fn insert(&mut self, card: Card) -> Result<u16, ValidationError> {
        validate_card(&card)?;
        if self.symbol_to_id.contains_key(&card.symbol) {
            return Err(ValidationError::DuplicateSymbol(card.symbol));
        }
        let id = u16::try_from(self.by_id.len())
            .map_err(|_| ValidationError::TooManyCards(self.by_id.len() + 1))?;
        self.symbol_to_id.insert(card.symbol.clone(), id);
        self.by_id.push(card);
        Ok(id)
    }
}
