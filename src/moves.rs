// src/moves.rs
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MoveError;
use crate::location::Location;

lazy_static! {
    // Square numbers joined by '-' (simple step) or 'x' (captures), e.g. "9-13", "9x18x27".
    static ref NOTATION: Regex = Regex::new(r"^(\d{1,2})(?:\s*[-xX]\s*\d{1,2})+$")
        .expect("move notation regex is valid");
    static ref SEPARATOR: Regex = Regex::new(r"\s*[-xX]\s*").expect("separator regex is valid");
}

// --- Move Representation ---

/// An ordered path of at least two squares. Two rows between consecutive
/// squares is a jump; a path with more than two squares is a capture chain.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "Vec<Location>", into = "Vec<Location>")]
pub struct Move(Vec<Location>);

impl Move {
    /// Wraps a path, rejecting anything shorter than two squares.
    pub fn new(path: Vec<Location>) -> Result<Self, MoveError> {
        if path.len() < 2 {
            return Err(MoveError::TooShort(path.len()));
        }
        Ok(Move(path))
    }

    /// Generator-side constructor; callers guarantee `path.len() >= 2`.
    pub(crate) fn from_path(path: Vec<Location>) -> Self {
        debug_assert!(path.len() >= 2, "move path too short: {:?}", path);
        Move(path)
    }

    /// Convenience for a two-square move.
    pub fn step(from: Location, to: Location) -> Self {
        Move(vec![from, to])
    }

    pub fn path(&self) -> &[Location] { &self.0 }

    pub fn origin(&self) -> Location { self.0[0] }

    pub fn destination(&self) -> Location { self.0[self.0.len() - 1] }

    /// Number of squares in the path.
    pub fn len(&self) -> usize { self.0.len() }

    /// Always false: a move has at least two squares.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Consecutive (from, to) pairs.
    pub fn hops(&self) -> impl Iterator<Item = (Location, Location)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// True if the first hop spans two rows.
    pub fn is_capture(&self) -> bool {
        let (from, to) = (self.0[0], self.0[1]);
        from.row.abs_diff(to.row) == 2
    }

    /// Pieces this move removes, one per jump.
    pub fn capture_count(&self) -> usize {
        self.hops().filter(|(a, b)| a.row.abs_diff(b.row) == 2).count()
    }

    /// Standard notation using square numbers 1..=32.
    pub fn to_notation(&self) -> String {
        let sep = if self.is_capture() { "x" } else { "-" };
        self.0.iter().map(|loc| loc.number().to_string()).collect::<Vec<_>>().join(sep)
    }
}

impl TryFrom<Vec<Location>> for Move {
    type Error = MoveError;

    fn try_from(path: Vec<Location>) -> Result<Self, Self::Error> {
        Move::new(path)
    }
}

impl From<Move> for Vec<Location> {
    fn from(mv: Move) -> Self { mv.0 }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

/// Parses square-number notation. Only the format is checked here; whether
/// the path is playable is up to the board.
impl FromStr for Move {
    type Err = MoveError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if !NOTATION.is_match(trimmed) {
            return Err(MoveError::InvalidNotation(trimmed.to_string()));
        }

        let mut path = Vec::new();
        for part in SEPARATOR.split(trimmed) {
            let number: u32 = part.parse()
                .map_err(|_| MoveError::InvalidNotation(trimmed.to_string()))?;
            let loc = Location::from_number(number).ok_or(MoveError::InvalidSquareNumber(number))?;
            path.push(loc);
        }
        Move::new(path)
    }
}
