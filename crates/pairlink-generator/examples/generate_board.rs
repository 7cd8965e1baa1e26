//! Example demonstrating board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` for a given size and palette
//! - Generate a board from a random or fixed seed
//! - Count the moves available on the opening board
//! - Sample many boards and keep the one with the fewest opening moves
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Reproduce a board from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample boards in parallel and keep the tightest opening:
//!
//! ```sh
//! cargo run --example generate_board -- --samples 10000
//! ```

use std::process;

use clap::Parser;
use pairlink_core::Palette;
use pairlink_generator::{BoardGenerator, BoardSeed, GeneratedBoard};
use pairlink_solver::count_moves;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of rows.
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of columns.
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Number of distinct symbols.
    #[arg(long, value_name = "COUNT", default_value_t = Palette::DEFAULT_LEN)]
    palette: u16,

    /// Seed to reproduce (64 hexadecimal characters).
    #[arg(long, conflicts_with = "samples")]
    seed: Option<BoardSeed>,

    /// Boards to sample; the one with the fewest opening moves is shown.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let generator = match BoardGenerator::new(args.rows, args.cols, Palette::new(args.palette)) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("Invalid board configuration: {err}");
            process::exit(2);
        }
    };

    if let Some(seed) = args.seed {
        print_board(&generator.generate_with_seed(seed), None);
        return;
    }

    let Some(samples) = args.samples else {
        print_board(&generator.generate(), None);
        return;
    };
    if samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let tightest = (0..samples)
        .into_par_iter()
        .map(|_| {
            let board = generator.generate();
            let moves = count_moves(&board.grid);
            (board, moves)
        })
        .min_by_key(|(_, moves)| *moves);

    if let Some((board, _)) = tightest {
        print_board(&board, Some(samples));
    }
}

fn print_board(board: &GeneratedBoard, samples: Option<usize>) {
    println!("Seed:");
    println!("  {}", board.seed);
    println!();

    if let Some(samples) = samples {
        println!("Selection:");
        println!("  Samples: {samples}");
        println!();
    }

    println!("Board:");
    for line in board.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Stats:");
    println!("  symbols: {}", board.grid.symbol_counts().len());
    println!("  opening moves: {}", count_moves(&board.grid));
}
