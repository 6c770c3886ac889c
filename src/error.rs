// src/error.rs
//! Error types for move handling, game flow and stats export.
use std::io;
use thiserror::Error;

use crate::location::Location;
use crate::moves::Move;

/// A move that cannot be applied to the board it was handed.
///
/// These are contract violations by the caller: moves coming out of the
/// legal move generator never produce them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("a move needs at least two squares, got {0}")]
    TooShort(usize),

    #[error("square {0:?} is off the board")]
    OutOfBounds(Location),

    #[error("no piece on square {0}")]
    NoPieceAt(Location),

    #[error("{from} -> {to} is not a diagonal step or jump for this piece")]
    NotDiagonal { from: Location, to: Location },

    #[error("a simple step cannot be part of a multi-square move")]
    MixedSteps,

    #[error("landing square {0} is occupied")]
    Occupied(Location),

    #[error("no opposing piece to capture between {from} and {to}")]
    NothingToCapture { from: Location, to: Location },

    #[error("the man was crowned on {0}, so the capture chain must stop there")]
    ContinuedAfterPromotion(Location),

    #[error("invalid move notation '{0}', expected e.g. '9-13' or '9x18x27'")]
    InvalidNotation(String),

    #[error("square number {0} is not between 1 and 32")]
    InvalidSquareNumber(u32),
}

/// Errors raised while driving a game.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("{0} is not a legal move in this position")]
    IllegalMove(Move),

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Move(#[from] MoveError),
}

#[derive(Error, Debug)]
pub enum SaveLoadError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error with file '{0}': {1}")]
    Io(String, #[source] io::Error),
}
