// src/board.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::location::{Location, HEIGHT, SQUARE_COUNT, WIDTH};
use crate::moves::Move;
use crate::square::{Player, Square};
use crate::zobrist::ZOBRIST;

/// The 8x4 compressed grid, indexed `[row][col]`.
pub type Grid = [[Square; WIDTH as usize]; HEIGHT as usize];

// --- Piece Counts ---

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PieceCounts {
    pub p1_men: u8,
    pub p2_men: u8,
    pub p1_kings: u8,
    pub p2_kings: u8,
}

impl PieceCounts {
    pub fn from_grid(grid: &Grid) -> Self {
        let mut counts = PieceCounts::default();
        for square in grid.iter().flatten() {
            match square {
                Square::Empty => {}
                Square::Man(Player::One) => counts.p1_men += 1,
                Square::Man(Player::Two) => counts.p2_men += 1,
                Square::King(Player::One) => counts.p1_kings += 1,
                Square::King(Player::Two) => counts.p2_kings += 1,
            }
        }
        counts
    }

    /// (men, kings) for one player.
    pub fn for_player(&self, player: Player) -> (u8, u8) {
        match player {
            Player::One => (self.p1_men, self.p1_kings),
            Player::Two => (self.p2_men, self.p2_kings),
        }
    }

    pub fn total(&self, player: Player) -> u8 {
        let (men, kings) = self.for_player(player);
        men + kings
    }
}

// --- Board State ---

/// Canonical serialized form: 32 cells in row-major order plus the turn flag.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BoardRecord {
    pub cells: [Square; SQUARE_COUNT],
    pub player_one_to_move: bool,
}

/// An 8x8 checkers board stored as its 32 playable squares, plus the side to move.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(from = "BoardRecord", into = "BoardRecord")]
pub struct Board {
    squares: Grid,
    turn: Player,
}

impl Default for Board {
    fn default() -> Self { Board::new() }
}

impl Board {
    /// Standard start position, player one to move.
    pub fn new() -> Self {
        Board { squares: Self::initial_grid(), turn: Player::One }
    }

    /// A board with no pieces on it.
    pub fn empty(turn: Player) -> Self {
        Board { squares: [[Square::Empty; WIDTH as usize]; HEIGHT as usize], turn }
    }

    pub fn from_grid(squares: Grid, turn: Player) -> Self {
        Board { squares, turn }
    }

    pub fn from_cells(cells: [Square; SQUARE_COUNT], player_one_to_move: bool) -> Self {
        let mut board = Board::empty(Player::from_turn_flag(player_one_to_move));
        for (index, cell) in cells.into_iter().enumerate() {
            let row = index / WIDTH as usize;
            let col = index % WIDTH as usize;
            board.squares[row][col] = cell;
        }
        board
    }

    fn initial_grid() -> Grid {
        let mut grid = [[Square::Empty; WIDTH as usize]; HEIGHT as usize];
        for (row, squares) in grid.iter_mut().enumerate() {
            let fill = match row {
                0..=2 => Square::Man(Player::One),
                5..=7 => Square::Man(Player::Two),
                _ => Square::Empty,
            };
            *squares = [fill; WIDTH as usize];
        }
        grid
    }

    /// Puts the start position back, leaving the turn as it is.
    pub fn reset(&mut self) {
        self.squares = Self::initial_grid();
    }

    /// Removes every piece.
    pub fn clear(&mut self) {
        self.squares = [[Square::Empty; WIDTH as usize]; HEIGHT as usize];
    }

    /// Places pieces (or empties squares) without any rule checks.
    /// Off-grid locations are skipped.
    pub fn insert_pieces(&mut self, pieces: &[(Location, Square)]) {
        for &(loc, square) in pieces {
            if !loc.in_bounds() {
                warn!("ignoring piece placed off the grid at {}", loc);
                continue;
            }
            self.set(loc, square);
        }
    }

    /// Contents of `loc`; off-grid locations read as empty.
    #[inline]
    pub fn get(&self, loc: Location) -> Square {
        if !loc.in_bounds() {
            return Square::Empty;
        }
        self.squares[loc.row as usize][loc.col as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, loc: Location, square: Square) {
        self.squares[loc.row as usize][loc.col as usize] = square;
    }

    pub fn grid(&self) -> &Grid { &self.squares }

    pub fn turn(&self) -> Player { self.turn }

    /// True when player one is to move.
    pub fn player_turn(&self) -> bool { self.turn == Player::One }

    pub fn set_turn(&mut self, turn: Player) { self.turn = turn; }

    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    pub fn to_cells(&self) -> [Square; SQUARE_COUNT] {
        let mut cells = [Square::Empty; SQUARE_COUNT];
        for (index, square) in self.squares.iter().flatten().enumerate() {
            cells[index] = *square;
        }
        cells
    }

    /// Squares holding one of `player`'s pieces, in row-major order.
    pub fn piece_locations(&self, player: Player) -> Vec<Location> {
        let mut locations = Vec::with_capacity(12);
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let loc = Location::new(row, col);
                if self.get(loc).belongs_to(player) {
                    locations.push(loc);
                }
            }
        }
        locations
    }

    pub fn piece_counts(&self) -> PieceCounts {
        PieceCounts::from_grid(&self.squares)
    }

    /// Moves a piece over `over` onto `to`, emptying `from` and `over`.
    /// No crowning, no turn change: this is one hop of a capture chain.
    pub(crate) fn jump(&mut self, from: Location, over: Location, to: Location) {
        let piece = self.get(from);
        self.set(from, Square::Empty);
        self.set(over, Square::Empty);
        self.set(to, piece);
    }

    /// The grid each move would lead to, without touching `self` or the turn.
    pub fn successor_grids(&self, moves: &[Move]) -> Result<Vec<Grid>, crate::error::MoveError> {
        moves.iter().map(|mv| {
            let mut next = self.clone();
            next.apply_move(mv, false)?;
            Ok(next.squares)
        }).collect()
    }

    pub fn zobrist_key(&self) -> u64 {
        let zob = &*ZOBRIST;
        let mut key = 0u64;
        for (index, square) in self.squares.iter().flatten().enumerate() {
            key ^= zob.square(*square, index);
        }
        key ^= zob.side_to_move(self.turn);
        key
    }
}

impl From<BoardRecord> for Board {
    fn from(record: BoardRecord) -> Self {
        Board::from_cells(record.cells, record.player_one_to_move)
    }
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        BoardRecord { cells: board.to_cells(), player_one_to_move: board.player_turn() }
    }
}

// Unplayable squares are hatched; row 0 is printed first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let norm_line = "|---|---|---|---|---|---|---|---|";
        writeln!(f, "{}", norm_line)?;
        for row in 0..HEIGHT {
            let mut line = String::from(if row % 2 == 1 { "|///|" } else { "|" });
            for col in 0..WIDTH {
                line.push_str(&format!(" {} |", self.get(Location::new(row, col))));
                if col != WIDTH - 1 || row % 2 != 1 {
                    line.push_str("///|");
                }
            }
            writeln!(f, "{}", line)?;
            writeln!(f, "{}", norm_line)?;
        }
        Ok(())
    }
}
