// src/apply.rs
//! Realising a chosen move on a board.
use tracing::warn;

use crate::board::Board;
use crate::error::MoveError;
use crate::location::{forward_locations, jumped_location, Location};
use crate::moves::Move;
use crate::movegen::step_directions;
use crate::square::Square;

impl Board {
    /// Plays `mv` on this board: removes every jumped piece, moves the piece
    /// from the origin to the destination, crowns a man that ends on its
    /// promotion row and, if `switch_turn`, hands the move to the opponent.
    ///
    /// The path is checked for shape first (diagonal steps in the piece's
    /// directions, empty landings, an opposing piece under every jump, no
    /// hop after crowning). Forced capture is not checked here; that is the
    /// job of [`crate::movegen::legal_moves`]. On error the board is untouched.
    pub fn apply_move(&mut self, mv: &Move, switch_turn: bool) -> Result<(), MoveError> {
        if let Err(e) = self.validate_move(mv) {
            warn!("rejected move {:?}: {}", mv.path(), e);
            return Err(e);
        }
        self.apply_unchecked(mv, switch_turn);
        Ok(())
    }

    /// Checks that `mv` is a well-formed path for the piece on its origin.
    pub fn validate_move(&self, mv: &Move) -> Result<(), MoveError> {
        let path = mv.path();
        if path.len() < 2 {
            return Err(MoveError::TooShort(path.len()));
        }
        if let Some(bad) = path.iter().find(|loc| !loc.in_bounds()) {
            return Err(MoveError::OutOfBounds(*bad));
        }

        let origin = mv.origin();
        let piece = self.get(origin);
        let Some(owner) = piece.owner() else {
            return Err(MoveError::NoPieceAt(origin));
        };

        let mut captured: Vec<Location> = Vec::with_capacity(path.len() - 1);
        for (index, (from, to)) in mv.hops().enumerate() {
            let distance = from.row.abs_diff(to.row);
            if distance != 1 && distance != 2 {
                return Err(MoveError::NotDiagonal { from, to });
            }
            if distance == 1 && path.len() > 2 {
                return Err(MoveError::MixedSteps);
            }
            if index > 0 && piece.promotes_on_row(from.row) {
                return Err(MoveError::ContinuedAfterPromotion(from));
            }

            let reachable = step_directions(piece).iter().any(|&backwards| {
                forward_locations(from, distance, backwards).contains(&Some(to))
            });
            if !reachable {
                return Err(MoveError::NotDiagonal { from, to });
            }

            // The origin is vacated as soon as the piece leaves it.
            if to != origin && !self.get(to).is_empty() {
                return Err(MoveError::Occupied(to));
            }

            if distance == 2 {
                let over = jumped_location(from, to);
                if captured.contains(&over) || !self.get(over).is_opponent_of(owner) {
                    return Err(MoveError::NothingToCapture { from, to });
                }
                captured.push(over);
            }
        }
        Ok(())
    }

    /// Mutation half of [`Board::apply_move`]; the caller vouches for `mv`.
    pub(crate) fn apply_unchecked(&mut self, mv: &Move, switch_turn: bool) {
        for (from, to) in mv.hops() {
            if from.row.abs_diff(to.row) == 2 {
                self.set(jumped_location(from, to), Square::Empty);
            }
        }

        // Lift the piece first so a chain ending on its own origin keeps it.
        let origin = mv.origin();
        let destination = mv.destination();
        let piece = self.get(origin);
        self.set(origin, Square::Empty);

        let landed = if piece.promotes_on_row(destination.row) { piece.crowned() } else { piece };
        self.set(destination, landed);

        if switch_turn {
            self.switch_turn();
        }
    }
}
