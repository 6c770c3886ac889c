// src/lib.rs
//! Rules engine for 8x8 checkers on a compressed 8x4 grid.
//!
//! The engine generates legal moves (with forced capture and maximal
//! capture chains), applies moves, detects the end of the game and
//! summarizes positions into fixed-width feature vectors for an external
//! evaluator. [`game`] and [`agent`] add the bookkeeping needed for self-play.

pub mod agent;
pub mod apply;
pub mod board;
pub mod error;
pub mod features;
pub mod game;
pub mod location;
pub mod movegen;
pub mod moves;
pub mod square;
mod zobrist;

pub use agent::{Agent, RandomAgent};
pub use board::{Board, BoardRecord, Grid, PieceCounts};
pub use error::{GameError, MoveError, SaveLoadError};
pub use features::{summarize, StateFeatures};
pub use game::{play_game, DrawReason, Game, GameResult, GameStats, MoveRecord};
pub use location::{forward_locations, Location, HEIGHT, WIDTH};
pub use movegen::{capture_moves, simple_moves};
pub use moves::Move;
pub use square::{Player, Square, BACKWARDS_PLAYER};

// --- Engine Entry Points ---

/// Legal moves for the side to move; empty once that side has lost.
pub fn get_legal_moves(board: &Board) -> Vec<Move> {
    movegen::legal_moves(board)
}

/// Applies `mv` in place, optionally passing the turn. Malformed moves are
/// rejected before anything changes.
pub fn apply_move(board: &mut Board, mv: &Move, switch_turn: bool) -> Result<(), MoveError> {
    board.apply_move(mv, switch_turn)
}

/// True when the side to move has no legal move and has therefore lost.
pub fn is_game_over(board: &Board) -> bool {
    movegen::is_game_over(board)
}

/// Feature vectors for a batch of grids, all seen from `own`'s side.
pub fn summarize_states(grids: &[Grid], own: Player) -> Vec<StateFeatures> {
    features::summarize_states(grids, own)
}
