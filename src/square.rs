// src/square.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// The player whose men move toward row 0 instead of row 7.
pub const BACKWARDS_PLAYER: Player = Player::Two;

// --- Players ---

/// One of the two sides. Player one starts on rows 0-2, player two on rows 5-7.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player { One, Two }

impl Player {
    pub fn opponent(&self) -> Player {
        match self { Player::One => Player::Two, Player::Two => Player::One }
    }

    pub fn index(&self) -> usize { // Helper for Zobrist indexing
        match self { Player::One => 0, Player::Two => 1 }
    }

    /// Maps the boolean turn flag (true = player one) onto a player.
    pub fn from_turn_flag(player_one: bool) -> Player {
        if player_one { Player::One } else { Player::Two }
    }

    /// Row a man of this player is crowned on.
    pub fn promotion_row(&self) -> u8 {
        match self { Player::One => 7, Player::Two => 0 }
    }

    pub fn moves_backwards(&self) -> bool {
        *self == BACKWARDS_PLAYER
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

// --- Squares ---

/// Contents of one playable square.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    Man(Player),
    King(Player),
}

impl Square {
    pub fn owner(&self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Man(p) | Square::King(p) => Some(*p),
        }
    }

    pub fn is_empty(&self) -> bool { *self == Square::Empty }

    pub fn is_king(&self) -> bool { matches!(self, Square::King(_)) }

    pub fn belongs_to(&self, player: Player) -> bool {
        self.owner() == Some(player)
    }

    /// True if this square holds a piece of the side opposing `player`.
    pub fn is_opponent_of(&self, player: Player) -> bool {
        self.owner() == Some(player.opponent())
    }

    /// True if this is a man that gets crowned on `row`.
    pub fn promotes_on_row(&self, row: u8) -> bool {
        match self {
            Square::Man(p) => p.promotion_row() == row,
            _ => false,
        }
    }

    /// The piece after crowning. Kings and empty squares are unchanged.
    pub fn crowned(&self) -> Square {
        match self {
            Square::Man(p) => Square::King(*p),
            other => *other,
        }
    }

    /// Index 0..4 of an occupied square, used for Zobrist keys.
    pub(crate) fn piece_index(&self) -> Option<usize> {
        match self {
            Square::Empty => None,
            Square::Man(p) => Some(p.index()),
            Square::King(p) => Some(2 + p.index()),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Man(Player::One) => 'o',
            Square::Man(Player::Two) => 'x',
            Square::King(Player::One) => 'O',
            Square::King(Player::Two) => 'X',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            ' ' | '.' => Some(Square::Empty),
            'o' => Some(Square::Man(Player::One)),
            'x' => Some(Square::Man(Player::Two)),
            'O' => Some(Square::King(Player::One)),
            'X' => Some(Square::King(Player::Two)),
            _ => None,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_and_direction() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert!(Player::Two.moves_backwards());
        assert!(!Player::One.moves_backwards());
        assert_eq!(Player::from_turn_flag(true), Player::One);
    }

    #[test]
    fn ownership_checks() {
        let king = Square::King(Player::Two);
        assert!(king.is_opponent_of(Player::One));
        assert!(!king.is_opponent_of(Player::Two));
        assert!(!Square::Empty.is_opponent_of(Player::One));
        assert!(Square::Man(Player::One).belongs_to(Player::One));
    }

    #[test]
    fn promotion_rows() {
        assert!(Square::Man(Player::One).promotes_on_row(7));
        assert!(!Square::Man(Player::One).promotes_on_row(0));
        assert!(Square::Man(Player::Two).promotes_on_row(0));
        assert!(!Square::King(Player::One).promotes_on_row(7));
        assert_eq!(Square::Man(Player::Two).crowned(), Square::King(Player::Two));
    }

    #[test]
    fn symbols_round_trip() {
        for sq in [Square::Empty, Square::Man(Player::One), Square::Man(Player::Two),
                   Square::King(Player::One), Square::King(Player::Two)] {
            assert_eq!(Square::from_symbol(sq.symbol()), Some(sq));
        }
        assert_eq!(Square::from_symbol('q'), None);
    }
}
