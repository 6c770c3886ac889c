// src/game.rs
//! Turn bookkeeping on top of the rules engine: history, results and stats.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use tracing::{debug, info};

use crate::agent::Agent;
use crate::board::{Board, PieceCounts};
use crate::error::{GameError, SaveLoadError};
use crate::movegen::legal_moves;
use crate::moves::Move;
use crate::square::Player;

/// Plies without a capture after which the game is drawn.
pub const DEFAULT_DRAW_LIMIT: u32 = 80;
pub const DEFAULT_STATS_FILENAME: &str = "checkers_stats.json";

// --- Results ---

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    NoCaptureLimit,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The loser was to move with no legal moves, or resigned.
    Win { winner: Player },
    Draw(DrawReason),
}

impl GameResult {
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win { winner } => Some(*winner),
            GameResult::Draw(_) => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win { winner } => write!(f, "{} wins", winner),
            GameResult::Draw(DrawReason::NoCaptureLimit) => write!(f, "Draw (no capture limit reached)"),
        }
    }
}

// --- History and Stats ---

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub notation: String,
    pub captures: usize,
    pub crowned: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub result: Option<GameResult>,
    pub plies: usize,
    pub player_one_moves: Vec<MoveRecord>,
    pub player_two_moves: Vec<MoveRecord>,
    pub final_pieces: PieceCounts,
    pub final_board: Board,
}

// --- Game State ---

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
    plies_since_capture: u32,
    draw_limit: u32,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self { Game::new() }
}

impl Game {
    /// A new game from the start position.
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    /// A game continuing from an arbitrary position.
    pub fn from_board(board: Board) -> Self {
        let mut game = Game {
            board,
            history: Vec::new(),
            plies_since_capture: 0,
            draw_limit: DEFAULT_DRAW_LIMIT,
            result: None,
        };
        game.result = game.check_game_end();
        game
    }

    pub fn with_draw_limit(mut self, plies: u32) -> Self {
        self.draw_limit = plies;
        self.result = self.check_game_end();
        self
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn history(&self) -> &[MoveRecord] { &self.history }

    pub fn result(&self) -> Option<GameResult> { self.result }

    pub fn is_over(&self) -> bool { self.result.is_some() }

    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() { Vec::new() } else { legal_moves(&self.board) }
    }

    /// Plays `mv` for the side to move after checking it against the legal
    /// move list, then updates the result.
    pub fn play(&mut self, mv: &Move) -> Result<Option<GameResult>, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !legal_moves(&self.board).contains(mv) {
            return Err(GameError::IllegalMove(mv.clone()));
        }

        let player = self.board.turn();
        let was_king = self.board.get(mv.origin()).is_king();
        self.board.apply_move(mv, true)?;

        let captures = mv.capture_count();
        let crowned = !was_king && self.board.get(mv.destination()).is_king();
        if captures > 0 {
            self.plies_since_capture = 0;
        } else {
            self.plies_since_capture += 1;
        }
        debug!("{} played {}", player, mv);
        self.history.push(MoveRecord { player, notation: mv.to_notation(), captures, crowned });

        self.result = self.check_game_end();
        if let Some(result) = self.result {
            info!("game over after {} plies: {}", self.history.len(), result);
        }
        Ok(self.result)
    }

    /// Ends the game in favour of the side not to move.
    pub fn resign(&mut self) -> GameResult {
        let result = GameResult::Win { winner: self.board.turn().opponent() };
        info!("{} resigns", self.board.turn());
        self.result = Some(result);
        result
    }

    /// Result implied by the current position, if the game has ended.
    pub fn check_game_end(&self) -> Option<GameResult> {
        if legal_moves(&self.board).is_empty() {
            return Some(GameResult::Win { winner: self.board.turn().opponent() });
        }
        if self.plies_since_capture >= self.draw_limit {
            return Some(GameResult::Draw(DrawReason::NoCaptureLimit));
        }
        None
    }

    pub fn stats(&self) -> GameStats {
        let (player_one_moves, player_two_moves): (Vec<MoveRecord>, Vec<MoveRecord>) = self.history.iter().cloned()
            .partition(|record| record.player == Player::One);
        GameStats {
            result: self.result,
            plies: self.history.len(),
            player_one_moves,
            player_two_moves,
            final_pieces: self.board.piece_counts(),
            final_board: self.board.clone(),
        }
    }

    /// Saves the game statistics to a JSON file.
    pub fn save_stats_to_file(&self, filename: &str) -> Result<(), SaveLoadError> {
        let json_data = serde_json::to_string_pretty(&self.stats())?;
        fs::write(filename, json_data)
            .map_err(|e| SaveLoadError::Io(filename.to_string(), e))?;
        Ok(())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        let counts = self.board.piece_counts();
        writeln!(f, "Player 1 (o/O): {} men, {} kings", counts.p1_men, counts.p1_kings)?;
        writeln!(f, "Player 2 (x/X): {} men, {} kings", counts.p2_men, counts.p2_kings)?;

        if !self.history.is_empty() {
            write!(f, "Moves:")?;
            for (ply, record) in self.history.iter().enumerate() {
                if ply % 2 == 0 { write!(f, " {}.", ply / 2 + 1)?; }
                write!(f, " {}", record.notation)?;
            }
            writeln!(f)?;
        }

        match self.result {
            Some(result) => writeln!(f, "Result: {}", result),
            None => writeln!(f, "Turn: {}", self.board.turn()),
        }
    }
}

// --- Self-Play ---

/// Runs `game` to completion, asking `one` and `two` for their moves.
/// An agent that returns no move (or an illegal one) resigns.
pub fn play_game(game: &mut Game, one: &mut dyn Agent, two: &mut dyn Agent) -> GameResult {
    loop {
        if let Some(result) = game.result() {
            one.game_completed(game.board(), result);
            two.game_completed(game.board(), result);
            return result;
        }

        let moves = game.legal_moves();
        let agent: &mut dyn Agent = match game.board().turn() {
            Player::One => &mut *one,
            Player::Two => &mut *two,
        };

        let chosen = agent.choose_move(game.board(), &moves);
        match chosen {
            Some(mv) => {
                if let Err(e) = game.play(&mv) {
                    info!("{} agent made an unplayable move: {}", agent.name(), e);
                    game.resign();
                }
            }
            None => {
                game.resign();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::square::Square;

    fn loc(row: u8, col: u8) -> Location { Location::new(row, col) }

    #[test]
    fn zero_draw_limit_ends_the_game_immediately() {
        let game = Game::new().with_draw_limit(0);
        assert_eq!(game.result(), Some(GameResult::Draw(DrawReason::NoCaptureLimit)));
        assert!(game.legal_moves().is_empty());
        assert_eq!(Game::new().with_draw_limit(5).result(), None);
    }

    #[test]
    fn play_records_history() {
        let mut game = Game::new();
        let mv = Move::step(loc(2, 1), loc(3, 1));
        assert_eq!(game.play(&mv).unwrap(), None);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].notation, "10-14");
        assert_eq!(game.history()[0].player, Player::One);
        assert_eq!(game.board().turn(), Player::Two);
    }

    #[test]
    fn illegal_move_is_rejected() {
        let mut game = Game::new();
        let backwards = Move::step(loc(5, 1), loc(4, 1));
        assert!(matches!(game.play(&backwards), Err(GameError::IllegalMove(_))));
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn capturing_last_piece_wins() {
        let mut board = Board::empty(Player::One);
        board.insert_pieces(&[
            (loc(2, 1), Square::Man(Player::One)),
            (loc(3, 1), Square::Man(Player::Two)),
        ]);
        let mut game = Game::from_board(board);
        let result = game.play(&Move::step(loc(2, 1), loc(4, 2))).unwrap();
        assert_eq!(result, Some(GameResult::Win { winner: Player::One }));
        assert!(matches!(game.play(&Move::step(loc(4, 2), loc(5, 2))), Err(GameError::GameOver)));
        assert_eq!(game.history()[0].captures, 1);
    }

    #[test]
    fn crowning_is_recorded() {
        let mut board = Board::empty(Player::One);
        board.insert_pieces(&[
            (loc(6, 1), Square::Man(Player::One)),
            (loc(0, 0), Square::Man(Player::Two)),
        ]);
        let mut game = Game::from_board(board);
        game.play(&Move::step(loc(6, 1), loc(7, 1))).unwrap();
        assert!(game.history()[0].crowned);
    }

    #[test]
    fn draw_after_quiet_plies() {
        let mut board = Board::empty(Player::One);
        board.insert_pieces(&[
            (loc(0, 0), Square::King(Player::One)),
            (loc(7, 3), Square::King(Player::Two)),
        ]);
        let mut game = Game::from_board(board).with_draw_limit(2);
        assert_eq!(game.play(&Move::step(loc(0, 0), loc(1, 0))).unwrap(), None);
        assert_eq!(game.play(&Move::step(loc(7, 3), loc(6, 3))).unwrap(),
                   Some(GameResult::Draw(DrawReason::NoCaptureLimit)));
    }

    #[test]
    fn resign_hands_win_to_opponent() {
        let mut game = Game::new();
        assert_eq!(game.resign(), GameResult::Win { winner: Player::Two });
        assert!(game.is_over());
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn stats_split_moves_by_player() {
        let mut game = Game::new();
        game.play(&Move::step(loc(2, 1), loc(3, 1))).unwrap();
        game.play(&Move::step(loc(5, 1), loc(4, 1))).unwrap();
        let stats = game.stats();
        assert_eq!(stats.plies, 2);
        assert_eq!(stats.player_one_moves.len(), 1);
        assert_eq!(stats.player_two_moves.len(), 1);
        assert_eq!(stats.final_pieces, game.board().piece_counts());
    }
}
