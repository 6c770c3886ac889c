// src/main.rs
use clap::{Parser, ValueEnum};
use std::error::Error;
use std::io::{self, Write};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use checkers_engine::game::{DEFAULT_DRAW_LIMIT, DEFAULT_STATS_FILENAME};
use checkers_engine::{play_game, Agent, Game, GameResult, Move, Player, RandomAgent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Play player one against the random agent
    Play,
    /// Let two random agents play each other
    SelfPlay,
}

#[derive(Debug, Parser)]
#[command(name = "checkers", about = "8x8 checkers rules engine driver")]
struct Args {
    #[arg(long, value_enum, default_value = "play")]
    mode: Mode,

    /// Number of games in self-play mode
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Seed for the random agents (OS entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Plies without a capture before the game is drawn
    #[arg(long, default_value_t = DEFAULT_DRAW_LIMIT)]
    draw_limit: u32,

    /// Where game statistics are written
    #[arg(long, default_value = DEFAULT_STATS_FILENAME)]
    stats_file: String,
}

fn make_agent(seed: Option<u64>, offset: u64) -> RandomAgent {
    match seed {
        Some(seed) => RandomAgent::seeded(seed.wrapping_add(offset)),
        None => RandomAgent::new(),
    }
}

// --- Input Parsing ---

#[derive(Debug)]
enum UserInput {
    Move(Move),
    Command(Command),
}

#[derive(Debug)]
enum Command {
    Moves, Resign, Help, Quit,
    SaveStats(String),
}

fn parse_user_input(input: &str) -> Result<UserInput, checkers_engine::MoveError> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let command_word = parts.next().unwrap_or("").to_lowercase();
    let argument = parts.next().unwrap_or("").trim();

    match command_word.as_str() {
        "moves" => return Ok(UserInput::Command(Command::Moves)),
        "resign" => return Ok(UserInput::Command(Command::Resign)),
        "help" | "?" => return Ok(UserInput::Command(Command::Help)),
        "quit" | "exit" => return Ok(UserInput::Command(Command::Quit)),
        "savestats" => {
            let filename = if argument.is_empty() { DEFAULT_STATS_FILENAME } else { argument }.to_string();
            return Ok(UserInput::Command(Command::SaveStats(filename)));
        }
        _ => {}
    }

    trimmed.parse::<Move>().map(UserInput::Move)
}

fn save_stats(game: &Game, filename: &str) {
    match game.save_stats_to_file(filename) {
        Ok(()) => println!("Stats saved to '{}'.", filename),
        Err(e) => warn!("failed to save stats: {}", e),
    }
}

// --- Modes ---

fn run_interactive(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut game = Game::new().with_draw_limit(args.draw_limit);
    let mut opponent = make_agent(args.seed, 0);
    print_help();

    'game_loop: loop {
        println!("------------------------------------------");
        println!("{}", game);

        if let Some(result) = game.result() {
            println!("=== GAME OVER: {} ===", result);
            save_stats(&game, &args.stats_file);
            break 'game_loop;
        }

        if game.board().turn() == Player::Two {
            let moves = game.legal_moves();
            match opponent.choose_move(game.board(), &moves) {
                Some(mv) => {
                    println!("{} plays {}", opponent.name(), mv);
                    game.play(&mv)?;
                }
                None => { game.resign(); }
            }
            continue 'game_loop;
        }

        print!("\nYour move (e.g. 10-14, 10x19x28) or command: ");
        io::stdout().flush()?;

        let mut input_line = String::new();
        if io::stdin().read_line(&mut input_line)? == 0 {
            println!("\nEnd of input detected. Quitting game.");
            save_stats(&game, &args.stats_file);
            break 'game_loop;
        }
        if input_line.trim().is_empty() { continue 'game_loop; }

        match parse_user_input(&input_line) {
            Ok(UserInput::Move(mv)) => {
                if let Err(e) = game.play(&mv) {
                    println!("Error making move: {}", e);
                }
            }
            Ok(UserInput::Command(command)) => match command {
                Command::Moves => {
                    let listed: Vec<String> = game.legal_moves().iter().map(Move::to_string).collect();
                    println!("Legal moves: {}", listed.join(", "));
                }
                Command::Resign => { game.resign(); }
                Command::Help => print_help(),
                Command::Quit => {
                    save_stats(&game, &args.stats_file);
                    println!("Exiting game.");
                    break 'game_loop;
                }
                Command::SaveStats(filename) => save_stats(&game, &filename),
            },
            Err(e) => println!("Input Error: {}", e),
        }
    }

    println!("\nGame session finished.");
    Ok(())
}

fn run_self_play(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut one = make_agent(args.seed, 0);
    let mut two = make_agent(args.seed, 1);
    let (mut p1_wins, mut p2_wins, mut draws) = (0u32, 0u32, 0u32);
    let mut last_game = None;

    for number in 1..=args.games {
        let mut game = Game::new().with_draw_limit(args.draw_limit);
        let result = play_game(&mut game, &mut one, &mut two);
        info!(game = number, plies = game.history().len(), "{}", result);
        match result {
            GameResult::Win { winner: Player::One } => p1_wins += 1,
            GameResult::Win { winner: Player::Two } => p2_wins += 1,
            GameResult::Draw(_) => draws += 1,
        }
        last_game = Some(game);
    }

    println!("Player 1 wins: {}, Player 2 wins: {}, draws: {}", p1_wins, p2_wins, draws);
    if let Some(game) = last_game {
        println!("{}", game);
        game.save_stats_to_file(&args.stats_file)?;
        println!("Stats of the last game saved to '{}'.", args.stats_file);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match args.mode {
        Mode::Play => run_interactive(&args),
        Mode::SelfPlay => run_self_play(&args),
    }
}

/// Prints available commands.
fn print_help() {
    println!("\nAvailable Commands:");
    println!("  <move>           Squares 1-32 joined by '-' for a step or 'x' for captures,");
    println!("                   e.g. 10-14 or 10x19x28. Captures are compulsory.");
    println!("  moves            List the legal moves.");
    println!("  resign           Forfeit the game.");
    println!("  savestats [file] Save game statistics (default: {}).", DEFAULT_STATS_FILENAME);
    println!("  help             Show this help message.");
    println!("  quit / exit      Exit the game (saves stats).");
    println!();
}
