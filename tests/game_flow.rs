use std::fs;

use checkers_engine::{
    play_game, Agent, Board, Game, GameResult, GameStats, Move, Player, RandomAgent,
};

/// Always plays the first legal move and remembers how the game ended.
#[derive(Default)]
struct FirstMoveAgent {
    finished: Option<GameResult>,
}

impl Agent for FirstMoveAgent {
    fn name(&self) -> &str { "first" }

    fn choose_move(&mut self, _board: &Board, moves: &[Move]) -> Option<Move> {
        moves.first().cloned()
    }

    fn game_completed(&mut self, _board: &Board, result: GameResult) {
        self.finished = Some(result);
    }
}

struct Resigner;

impl Agent for Resigner {
    fn name(&self) -> &str { "resigner" }

    fn choose_move(&mut self, _board: &Board, _moves: &[Move]) -> Option<Move> {
        None
    }
}

#[test]
fn random_self_play_always_finishes() {
    for seed in 0..20 {
        let mut game = Game::new();
        let mut one = RandomAgent::seeded(seed);
        let mut two = RandomAgent::seeded(seed + 1000);
        let result = play_game(&mut game, &mut one, &mut two);
        assert_eq!(game.result(), Some(result));
        assert!(game.legal_moves().is_empty());
        if let GameResult::Win { winner } = result {
            // The loser is the side left to move.
            assert_eq!(game.board().turn(), winner.opponent());
        }
    }
}

#[test]
fn same_seeds_replay_the_same_game() {
    let run = |seed: u64| {
        let mut game = Game::new();
        play_game(&mut game, &mut RandomAgent::seeded(seed), &mut RandomAgent::seeded(seed ^ 0xff));
        game.history().to_vec()
    };
    assert_eq!(run(3), run(3));
}

#[test]
fn agents_are_told_the_result() {
    let mut game = Game::new();
    let mut one = FirstMoveAgent::default();
    let mut two = FirstMoveAgent::default();
    let result = play_game(&mut game, &mut one, &mut two);
    assert_eq!(one.finished, Some(result));
    assert_eq!(two.finished, Some(result));
}

#[test]
fn an_agent_without_a_move_resigns() {
    let mut game = Game::new();
    let mut one = Resigner;
    let mut two = FirstMoveAgent::default();
    let result = play_game(&mut game, &mut one, &mut two);
    assert_eq!(result, GameResult::Win { winner: Player::Two });
    assert!(game.history().is_empty());
}

#[test]
fn stats_file_round_trips() {
    let mut game = Game::new();
    play_game(&mut game, &mut RandomAgent::seeded(11), &mut RandomAgent::seeded(12));

    let path = std::env::temp_dir().join(format!("checkers_stats_{}.json", std::process::id()));
    let path_str = path.to_str().unwrap();
    game.save_stats_to_file(path_str).unwrap();

    let loaded: GameStats = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded, game.stats());
    assert_eq!(loaded.plies, game.history().len());
    assert_eq!(loaded.final_board, *game.board());
}

#[test]
fn saving_to_a_missing_directory_fails() {
    let game = Game::new();
    let err = game.save_stats_to_file("/nonexistent-dir/for/stats.json").unwrap_err();
    assert!(err.to_string().contains("/nonexistent-dir/for/stats.json"));
}
