// src/location.rs
//! Coordinates on the compressed 8x4 grid.
//!
//! Each row stores only its four playable squares. On even rows column `c`
//! sits on real file `2c`, on odd rows on file `2c + 1`, so the column
//! offset of a diagonal neighbour depends on the parity of the row.
use serde::{Deserialize, Serialize};
use std::fmt;

pub const HEIGHT: u8 = 8;
pub const WIDTH: u8 = 4;
pub const SQUARE_COUNT: usize = (HEIGHT as usize) * (WIDTH as usize);

/// A playable square, addressed by row and compressed column.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub row: u8,
    pub col: u8,
}

impl Location {
    /// Builds a location without a bounds check. Use [`Location::checked`]
    /// for computed coordinates.
    pub const fn new(row: u8, col: u8) -> Self {
        Location { row, col }
    }

    /// Returns `None` for anything off the grid.
    pub fn checked(row: i16, col: i16) -> Option<Self> {
        if (0..HEIGHT as i16).contains(&row) && (0..WIDTH as i16).contains(&col) {
            Some(Location { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < HEIGHT && self.col < WIDTH
    }

    /// Row-major index 0..32.
    #[inline]
    pub fn index(&self) -> usize {
        self.row as usize * WIDTH as usize + self.col as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARE_COUNT { return None; }
        Some(Location { row: (index / WIDTH as usize) as u8, col: (index % WIDTH as usize) as u8 })
    }

    /// Standard checkers square number, 1..=32.
    pub fn number(&self) -> u32 {
        self.index() as u32 + 1
    }

    pub fn from_number(number: u32) -> Option<Self> {
        if number == 0 { return None; }
        Location::from_index(number as usize - 1)
    }

    /// True for the squares touching the left or right edge of the real board.
    pub fn is_edge(&self) -> bool {
        (self.col == 0 && self.row % 2 == 0) || (self.col == WIDTH - 1 && self.row % 2 == 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(f, "{}", self.number())
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

// --- Diagonal Neighbours ---

/// The (up to) two squares `n` diagonal rows away from `start`, moving toward
/// row 7 or, with `backwards`, toward row 0.
///
/// The first entry leans toward higher columns, the second toward lower ones,
/// so entries at the same index for `n = 1` and `n = 2` lie on one diagonal.
/// Off-grid candidates come back as `None`.
pub fn forward_locations(start: Location, n: u8, backwards: bool) -> [Option<Location>; 2] {
    let half = (n / 2) as i16;
    let (high_extra, low_extra) = if n % 2 == 0 {
        (0, 0)
    } else if start.row % 2 == 0 {
        (0, 1)
    } else {
        (1, 0)
    };

    let row = if backwards { start.row as i16 - n as i16 } else { start.row as i16 + n as i16 };
    let col = start.col as i16;

    [
        Location::checked(row, col + half + high_extra),
        Location::checked(row, col - half - low_extra),
    ]
}

/// The square jumped over when moving between two locations two rows apart.
///
/// The column comes from the parity of the earlier row: odd rows take the
/// larger of the two columns, even rows the smaller.
pub fn jumped_location(from: Location, to: Location) -> Location {
    let row = (from.row + to.row) / 2;
    let col = if from.row % 2 == 1 { from.col.max(to.col) } else { from.col.min(to.col) };
    Location::new(row, col)
}
