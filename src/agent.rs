// src/agent.rs
//! The decision-maker side of a game: anything that picks one of the legal moves.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::game::GameResult;
use crate::moves::Move;

/// Picks moves for one side. Learning agents implement this to plug into
/// [`crate::game::play_game`].
pub trait Agent {
    fn name(&self) -> &str;

    /// Chooses one of `moves` (the legal moves for `board`). Returning `None`
    /// forfeits the turn, which the game loop treats as resignation.
    fn choose_move(&mut self, board: &Board, moves: &[Move]) -> Option<Move>;

    /// Called once the game has ended, with the final board.
    fn game_completed(&mut self, _board: &Board, _result: GameResult) {}
}

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent { rng: StdRng::from_os_rng() }
    }

    /// Reproducible agent for tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomAgent {
    fn default() -> Self { RandomAgent::new() }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str { "random" }

    fn choose_move(&mut self, _board: &Board, moves: &[Move]) -> Option<Move> {
        if moves.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..moves.len());
        Some(moves[index].clone())
    }
}
