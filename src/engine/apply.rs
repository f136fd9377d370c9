use crate::board::Slot;
use crate::error::MoveError;
use crate::state::{GameState, Move};
use crate::types::{is_valid_position, Dir};

/// Neighbour positions the card just placed at `pos` captures.
///
/// Every direction is judged against the board as it stands before any flip,
/// so the result does not depend on the order directions are visited in.
fn captures_from(state: &GameState, pos: u8) -> Vec<u8> {
    let Some(placed) = state.board.get(pos) else {
        return Vec::new();
    };
    let Some(card) = state.cards.get(placed.card_id) else {
        return Vec::new();
    };
    let sides = card.sides();
    let opponent = placed.owner.other();

    let mut flips = Vec::with_capacity(4);
    for (dir, neighbour) in Dir::all().into_iter().zip(state.board.neighbours(pos)) {
        let Some((npos, nslot)) = neighbour else { continue };
        if nslot.owner != opponent {
            continue;
        }
        let Some(ncard) = state.cards.get(nslot.card_id) else { continue };
        // Ties never flip
        if sides[dir.index()] > ncard.sides()[dir.opposite().index()] {
            flips.push(npos);
        }
    }
    flips
}

impl GameState {
    /// Play `mv` for the current player, in place.
    ///
    /// On error the state is left untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if !is_valid_position(mv.position) {
            return Err(MoveError::PositionOutOfRange(mv.position));
        }
        if !self.board.is_empty(mv.position) {
            return Err(MoveError::PositionOccupied(mv.position));
        }
        if self.cards.get(mv.card_id).is_none() {
            return Err(MoveError::UnknownCard(mv.card_id));
        }
        let mover = self.current;
        if !self.hand_mut(mover).take(mv.card_id) {
            return Err(MoveError::CardNotInHand {
                card_id: mv.card_id,
                side: mover,
            });
        }

        self.board.set(
            mv.position,
            Slot {
                owner: mover,
                card_id: mv.card_id,
            },
        );
        self.add_score(mover, 1);

        for npos in captures_from(self, mv.position) {
            self.board.set_owner(npos, mover);
            self.add_score(mover, 1);
            self.add_score(mover.other(), -1);
        }

        self.current = mover.other();
        Ok(())
    }
}

/// Apply a move as a pure transform: returns a new GameState on success.
pub fn apply_move(state: &GameState, mv: Move) -> Result<GameState, MoveError> {
    let mut next = state.clone();
    next.apply_move(mv)?;
    Ok(next)
}
