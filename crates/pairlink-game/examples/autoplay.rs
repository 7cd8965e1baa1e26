//! Example that plays levels automatically by following hints.
//!
//! Each level is played by repeatedly matching the first hint until the board
//! is cleared. If the board stays stuck after every reshuffle, the session is
//! restarted, just as a frontend would do when the level timer runs out.
//!
//! # Usage
//!
//! ```sh
//! RUST_LOG=info cargo run --example autoplay
//! ```
//!
//! Replay a session and play more levels:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example autoplay -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1 --levels 14
//! ```

use std::process;

use clap::Parser;
use pairlink_game::{Game, GameConfig, LevelAdvance, MatchOutcome};
use pairlink_generator::BoardSeed;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of levels to play.
    #[arg(long, default_value_t = 7)]
    levels: usize,

    /// Number of rows.
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of columns.
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Number of distinct symbols.
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    palette: u16,

    /// Session seed (64 hexadecimal characters).
    #[arg(long)]
    seed: Option<BoardSeed>,
}

#[derive(Debug, Default)]
struct LevelStats {
    matches: usize,
    bends: [usize; 3],
    reshuffles: usize,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let config = GameConfig::default()
        .with_size(args.rows, args.cols)
        .with_palette_size(args.palette);
    let seed = args.seed.unwrap_or_else(BoardSeed::random);
    let mut game = match Game::with_seed(config, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Cannot start a game: {err}");
            process::exit(2);
        }
    };

    println!("Seed:");
    println!("  {seed}");
    println!();

    for _ in 0..args.levels {
        let level = game.level();
        let layout = game.layout();
        let stats = play_level(&mut game);

        println!("Level {level} ({layout}):");
        println!("  matches: {}", stats.matches);
        for (bends, count) in stats.bends.iter().enumerate() {
            println!("  {bends}-bend paths: {count}");
        }
        println!("  reshuffles: {}", stats.reshuffles);

        if !game.is_board_cleared() {
            println!("  result: stuck with {} tiles", game.remaining_tiles());
            println!();
            game.restart();
            continue;
        }

        match game.advance_level() {
            Ok(LevelAdvance::Next { .. }) => println!("  result: cleared"),
            Ok(LevelAdvance::Completed) => println!("  result: cleared, all levels done"),
            Err(err) => {
                eprintln!("Cannot advance: {err}");
                process::exit(1);
            }
        }
        println!();
    }
}

fn play_level(game: &mut Game) -> LevelStats {
    let mut stats = LevelStats::default();
    while let Some(hint) = game.request_hint() {
        let MatchOutcome::Matched(report) = game.attempt_match(hint.first, hint.second) else {
            log::error!("hint {} -> {} did not match", hint.first, hint.second);
            break;
        };
        stats.matches += 1;
        stats.bends[report.path.bend_count()] += 1;
        if report.reshuffled {
            stats.reshuffles += 1;
        }
    }
    stats
}
