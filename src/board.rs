use crate::types::{is_valid_position, Dir, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub owner: Side,
    pub card_id: u16,
}

/// Neighbour positions per board position, in [above, below, left, right] order.
/// Row `i` belongs to position `i + 1`.
const ADJACENCY: [[Option<u8>; 4]; 9] = [
    [Some(4), None, None, Some(2)],       // 1
    [Some(5), None, Some(1), Some(3)],    // 2
    [Some(6), None, Some(2), None],       // 3
    [Some(7), Some(1), None, Some(5)],    // 4
    [Some(8), Some(2), Some(4), Some(6)], // 5
    [Some(9), Some(3), Some(5), None],    // 6
    [None, Some(4), None, Some(8)],       // 7
    [None, Some(5), Some(7), Some(9)],    // 8
    [None, Some(6), Some(8), None],       // 9
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    // Index = position - 1
    cells: [Option<Slot>; 9],
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot at a 1-based position. Out-of-range positions read as empty.
    #[inline]
    pub fn get(&self, pos: u8) -> Option<Slot> {
        if is_valid_position(pos) {
            self.cells[(pos - 1) as usize]
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: u8, slot: Slot) {
        debug_assert!(is_valid_position(pos));
        self.cells[(pos - 1) as usize] = Some(slot);
    }

    #[inline]
    pub(crate) fn set_owner(&mut self, pos: u8, owner: Side) {
        if let Some(slot) = self.cells[(pos - 1) as usize].as_mut() {
            slot.owner = owner;
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: u8) -> bool {
        self.get(pos).is_none()
    }

    /// Empty positions in ascending order.
    pub fn empty_positions(&self) -> Vec<u8> {
        (1u8..=9).filter(|&p| self.is_empty(p)).collect()
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)] // at most 9 cells
    pub fn filled_count(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() == 9
    }

    /// Number of slots owned by `side`.
    #[allow(clippy::cast_possible_truncation)] // at most 9 cells
    pub fn owned_by(&self, side: Side) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|s| s.owner == side)
            .count() as u8
    }

    /// Positions adjacent to `pos` in [above, below, left, right] order.
    /// `None` marks the edge of the grid.
    #[inline]
    pub fn neighbour_positions(pos: u8) -> [Option<u8>; 4] {
        if is_valid_position(pos) {
            ADJACENCY[(pos - 1) as usize]
        } else {
            [None; 4]
        }
    }

    /// Occupants around `pos` in [above, below, left, right] order.
    /// Off-grid directions and empty slots both yield `None`.
    pub fn neighbours(&self, pos: u8) -> [Option<(u8, Slot)>; 4] {
        Self::neighbour_positions(pos).map(|n| n.and_then(|p| self.get(p).map(|s| (p, s))))
    }

    /// Occupant of the single neighbour of `pos` in direction `dir`.
    #[inline]
    pub fn neighbour(&self, pos: u8, dir: Dir) -> Option<(u8, Slot)> {
        self.neighbours(pos)[dir.index()]
    }
}
