// src/movegen.rs
//! Move generation: simple steps, capture chains and the forced-capture rule.
use tracing::{debug, trace};

use crate::board::Board;
use crate::location::{forward_locations, Location};
use crate::moves::Move;
use crate::square::Square;

const FORWARD: &[bool] = &[false];
const BACKWARD: &[bool] = &[true];
const BOTH: &[bool] = &[false, true];

/// Directions a piece may travel in, as `backwards` flags for
/// [`forward_locations`]. Kings go both ways; men only toward the
/// opponent's back rank. Empty squares have none.
pub fn step_directions(piece: Square) -> &'static [bool] {
    match piece {
        Square::Empty => &[],
        Square::King(_) => BOTH,
        Square::Man(p) if p.moves_backwards() => BACKWARD,
        Square::Man(_) => FORWARD,
    }
}

// --- Simple Moves ---

/// Single diagonal steps onto empty squares for the piece on `from`.
pub fn simple_moves(board: &Board, from: Location) -> Vec<Move> {
    let piece = board.get(from);
    let mut moves = Vec::with_capacity(4);
    for &backwards in step_directions(piece) {
        for to in forward_locations(from, 1, backwards).into_iter().flatten() {
            if board.get(to).is_empty() {
                moves.push(Move::step(from, to));
            }
        }
    }
    moves
}

// --- Capture Moves ---

/// Every maximal capture chain for the piece on `from`.
///
/// Each branch of the search is explored on its own copy of the board; the
/// board passed in is never modified. A chain is reported only once it
/// cannot be extended, and a man that lands on its crowning row stops there.
pub fn capture_moves(board: &Board, from: Location) -> Vec<Move> {
    let mut chain = vec![from];
    let mut moves = Vec::new();
    collect_capture_chains(board, from, &mut chain, &mut moves);
    moves
}

fn collect_capture_chains(board: &Board, from: Location, chain: &mut Vec<Location>, out: &mut Vec<Move>) {
    let piece = board.get(from);
    let Some(owner) = piece.owner() else { return };

    for &backwards in step_directions(piece) {
        let over_squares = forward_locations(from, 1, backwards);
        let landings = forward_locations(from, 2, backwards);

        for (over, land) in over_squares.into_iter().zip(landings) {
            let (Some(over), Some(land)) = (over, land) else { continue };
            if !board.get(over).is_opponent_of(owner) || !board.get(land).is_empty() {
                continue;
            }

            chain.push(land);
            let found_before = out.len();

            if !piece.promotes_on_row(land.row) {
                let mut next = board.clone();
                next.jump(from, over, land);
                collect_capture_chains(&next, land, chain, out);
            }

            // Nothing deeper was found, so this chain is maximal.
            if out.len() == found_before {
                trace!("capture chain {:?}", chain);
                out.push(Move::from_path(chain.clone()));
            }
            chain.pop();
        }
    }
}

// --- Legal Moves ---

/// All legal moves for the side to move.
///
/// If any piece can capture, only capture chains are legal. An empty result
/// means the side to move has lost.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let pieces = board.piece_locations(board.turn());

    let captures: Vec<Move> = pieces.iter().flat_map(|&loc| capture_moves(board, loc)).collect();
    if !captures.is_empty() {
        debug!("{:?} must capture: {} capture move(s)", board.turn(), captures.len());
        return captures;
    }

    let simple: Vec<Move> = pieces.iter().flat_map(|&loc| simple_moves(board, loc)).collect();
    if simple.is_empty() {
        debug!("{:?} has no legal moves", board.turn());
    } else {
        trace!("{:?} has {} simple move(s)", board.turn(), simple.len());
    }
    simple
}

/// Moves for a single piece, with captures taking precedence over steps.
/// This does not look at the rest of the board; use [`legal_moves`] for play.
pub fn moves_for_piece(board: &Board, from: Location) -> Vec<Move> {
    let captures = capture_moves(board, from);
    if !captures.is_empty() {
        return captures;
    }
    simple_moves(board, from)
}

/// The game is over when the side to move has nothing to play.
pub fn is_game_over(board: &Board) -> bool {
    let turn = board.turn();
    board.piece_locations(turn).iter().all(|&loc| {
        capture_moves(board, loc).is_empty() && simple_moves(board, loc).is_empty()
    })
}
