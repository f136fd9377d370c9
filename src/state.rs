use std::sync::Arc;

use crate::board::{Board, Slot};
use crate::cards::{Card, CardTable};
use crate::error::ValidationError;
use crate::types::{is_valid_position, Outcome, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub card_id: u16,
    pub position: u8, // 1..=9
}

/// Cards held by one side, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<u16>,
}

impl Hand {
    #[inline]
    pub fn contains(&self, card_id: u16) -> bool {
        self.cards.contains(&card_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.cards.iter().copied()
    }

    #[inline]
    pub(crate) fn push(&mut self, card_id: u16) {
        self.cards.push(card_id);
    }

    /// Remove a card, keeping the order of the rest. Returns true if removed.
    pub(crate) fn take(&mut self, card_id: u16) -> bool {
        match self.cards.iter().position(|&id| id == card_id) {
            Some(i) => {
                self.cards.remove(i);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) cards: Arc<CardTable>,
    pub(crate) board: Board,
    pub(crate) hands: [Hand; 2],
    pub(crate) current: Side,
    pub(crate) scores: [i32; 2],
}

impl GameState {
    #[inline]
    pub fn builder(current: Side) -> GameStateBuilder {
        GameStateBuilder::new(current)
    }

    #[inline]
    pub fn cards(&self) -> &CardTable {
        &self.cards
    }

    #[inline]
    pub fn card(&self, card_id: u16) -> Option<&Card> {
        self.cards.get(card_id)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side.index()]
    }

    #[inline]
    pub(crate) fn hand_mut(&mut self, side: Side) -> &mut Hand {
        &mut self.hands[side.index()]
    }

    #[inline]
    pub fn current_player(&self) -> Side {
        self.current
    }

    #[inline]
    pub fn score(&self, side: Side) -> i32 {
        self.scores[side.index()]
    }

    #[inline]
    pub(crate) fn add_score(&mut self, side: Side, delta: i32) {
        self.scores[side.index()] += delta;
    }

    /// Owner of a card wherever it currently is: board slot first, then hands.
    pub fn owner_of(&self, card_id: u16) -> Option<Side> {
        for pos in 1u8..=9 {
            if let Some(slot) = self.board.get(pos) {
                if slot.card_id == card_id {
                    return Some(slot.owner);
                }
            }
        }
        [Side::Player, Side::Opponent]
            .into_iter()
            .find(|&s| self.hand(s).contains(card_id))
    }

    /// Resolve a card in the current player's hand by its symbol.
    pub fn hand_card_by_symbol(&self, symbol: &str) -> Option<u16> {
        self.cards
            .id_by_symbol(symbol)
            .filter(|&id| self.hand(self.current).contains(id))
    }

    /// All moves for the current player: positions ascending in the outer
    /// loop, hand dealing order in the inner loop.
    ///
    /// This order is part of the contract: `best_move` keeps the first of
    /// several equally scored moves, so it decides which move wins a tie.
    pub fn next_possible_moves(&self) -> Vec<Move> {
        let hand = self.hand(self.current);
        let empty = self.board.empty_positions();
        let mut moves = Vec::with_capacity(empty.len() * hand.len());
        for position in empty {
            for card_id in hand.iter() {
                moves.push(Move { card_id, position });
            }
        }
        moves
    }

    /// The game ends once every position holds a card.
    #[inline]
    pub fn game_over(&self) -> bool {
        self.board.is_full()
    }

    pub fn winner(&self) -> Outcome {
        let p = self.score(Side::Player);
        let o = self.score(Side::Opponent);
        match p.cmp(&o) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::Player),
            std::cmp::Ordering::Less => Outcome::Winner(Side::Opponent),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Human-readable form of a move, e.g. `A@7`.
    pub fn describe_move(&self, mv: Move) -> String {
        match self.card(mv.card_id) {
            Some(c) => format!("{}@{}", c.symbol, mv.position),
            None => format!("#{}@{}", mv.card_id, mv.position),
        }
    }
}

/// Free-function aliases for callers that prefer them.
#[inline]
pub fn next_possible_moves(state: &GameState) -> Vec<Move> {
    state.next_possible_moves()
}

#[inline]
pub fn game_over(state: &GameState) -> bool {
    state.game_over()
}

#[inline]
pub fn winner(state: &GameState) -> Outcome {
    state.winner()
}

/// Incremental construction of a starting position.
///
/// Cards go either into a hand (in dealing order) or onto a board position.
/// Scores are derived from board ownership when `build` is called.
#[derive(Debug)]
pub struct GameStateBuilder {
    cards: CardTable,
    board: Board,
    hands: [Hand; 2],
    current: Side,
}

impl GameStateBuilder {
    pub fn new(current: Side) -> Self {
        Self {
            cards: CardTable::default(),
            board: Board::new(),
            hands: [Hand::default(), Hand::default()],
            current,
        }
    }

    pub fn current_player(&mut self, side: Side) -> &mut Self {
        self.current = side;
        self
    }

    pub fn hand_card(&mut self, owner: Side, card: Card) -> Result<&mut Self, ValidationError> {
        let id = self.cards.insert(card)?;
        self.hands[owner.index()].push(id);
        Ok(self)
    }

    pub fn board_card(
        &mut self,
        owner: Side,
        card: Card,
        position: u8,
    ) -> Result<&mut Self, ValidationError> {
        if !is_valid_position(position) {
            return Err(ValidationError::InvalidPosition {
                symbol: card.symbol,
                position: position.to_string(),
            });
        }
        if let Some(existing) = self.board.get(position) {
            let first = self
                .cards
                .get(existing.card_id)
                .map(|c| c.symbol.clone())
                .unwrap_or_default();
            return Err(ValidationError::DuplicatePosition {
                position,
                first,
                second: card.symbol,
            });
        }
        let card_id = self.cards.insert(card)?;
        self.board.set(position, Slot { owner, card_id });
        Ok(self)
    }

    pub fn build(&self) -> GameState {
        let scores = [
            i32::from(self.board.owned_by(Side::Player)),
            i32::from(self.board.owned_by(Side::Opponent)),
        ];
        GameState {
            cards: Arc::new(self.cards.clone()),
            board: self.board.clone(),
            hands: self.hands.clone(),
            current: self.current,
            scores,
        }
    }
}
