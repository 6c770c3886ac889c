// src/zobrist.rs
//! Zobrist keys for checkers positions, usable as memoization keys.
use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::location::SQUARE_COUNT;
use crate::square::{Player, Square};

lazy_static! {
    pub(crate) static ref ZOBRIST: ZobristTable = ZobristTable::new();
}

#[derive(Debug, Clone)]
pub(crate) struct ZobristTable {
    // piece_keys[piece_index][square]; piece_index covers man/king for both players
    piece_keys: [[u64; SQUARE_COUNT]; 4],
    player_two_to_move_key: u64,
}

impl ZobristTable {
    fn new() -> Self {
        // Fixed seed so keys are stable across runs
        let mut rng = StdRng::seed_from_u64(0xC4EC_4E55_0B0A_4D5E);
        let mut table = ZobristTable {
            piece_keys: [[0; SQUARE_COUNT]; 4],
            player_two_to_move_key: rng.next_u64(),
        };

        for piece in 0..4 {
            for square in 0..SQUARE_COUNT {
                table.piece_keys[piece][square] = rng.next_u64();
            }
        }

        table
    }

    #[inline(always)]
    pub(crate) fn square(&self, square: Square, index: usize) -> u64 {
        match square.piece_index() {
            Some(piece) => self.piece_keys[piece][index],
            None => 0,
        }
    }

    /// Returns 0 for player one.
    #[inline(always)]
    pub(crate) fn side_to_move(&self, player: Player) -> u64 {
        if player == Player::Two { self.player_two_to_move_key } else { 0 }
    }
}
