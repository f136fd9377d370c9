use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "P")]
    Player,
    #[serde(rename = "O")]
    Opponent,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }

    /// Single-letter tag used in files and rendering.
    #[inline]
    pub fn tag(self) -> char {
        match self {
            Side::Player => 'P',
            Side::Opponent => 'O',
        }
    }

    #[inline]
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "P" => Some(Side::Player),
            "O" => Some(Side::Opponent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{side}"),
            Outcome::Tie => write!(f, "nobody (tie)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Above,
    Below,
    Left,
    Right,
}

impl Dir {
    #[inline]
    pub fn all() -> [Dir; 4] {
        [Dir::Above, Dir::Below, Dir::Left, Dir::Right]
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Above => Dir::Below,
            Dir::Below => Dir::Above,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// Index into the [above, below, left, right] neighbour arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Dir::Above => 0,
            Dir::Below => 1,
            Dir::Left => 2,
            Dir::Right => 3,
        }
    }
}

/// Board positions in ascending order. Layout follows a numeric keypad:
///
/// ```text
/// 7 8 9
/// 4 5 6
/// 1 2 3
/// ```
pub const POSITIONS: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

pub const CORNERS: [u8; 4] = [1, 3, 7, 9];
pub const EDGES: [u8; 4] = [2, 4, 6, 8];

#[inline]
pub fn is_valid_position(pos: u8) -> bool {
    (1..=9).contains(&pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for d in Dir::all() {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn side_tags_parse_back() {
        for s in [Side::Player, Side::Opponent] {
            assert_eq!(Side::from_tag(&s.tag().to_string()), Some(s));
            assert_eq!(s.other().other(), s);
        }
        assert_eq!(Side::from_tag("X"), None);
    }
}
