//! Example demonstrating Tetonor puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator`
//! - Generate a puzzle from a seed, a phrase, or the current daily date
//! - Display the pairs, the grid values, and the strip
//! - Sample many seeds in parallel to look for degraded generations
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42 --difficulty hard
//! ```
//!
//! Derive the seed from a phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "good morning"
//! ```
//!
//! Scan a range of seeds and report the ones that could not produce every pair
//! within a reduced attempt budget:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --scan 100000 --max-attempts 20
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use tetonor_core::{Difficulty, GridSize, PuzzleConfig};
use tetonor_generator::{DEFAULT_MAX_ATTEMPTS, GeneratedPuzzle, PuzzleGenerator, seed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle seed.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<u32>,

    /// Phrase hashed into a seed.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Difficulty: easy, medium or hard.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: Difficulty,

    /// Grid size: 8 or 16.
    #[arg(long, value_name = "CELLS", default_value = "16")]
    size: GridSize,

    /// Pair attempts before generation gives up.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Number of seeds (starting at 0) to scan for degraded puzzles.
    #[arg(long, value_name = "COUNT")]
    scan: Option<u32>,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new().with_max_attempts(args.max_attempts);

    if let Some(count) = args.scan {
        if count == 0 {
            eprintln!("--scan must be at least 1.");
            process::exit(1);
        }
        let degraded = (0..count)
            .into_par_iter()
            .map(|seed| generator.generate(PuzzleConfig::new(seed, args.difficulty, args.size)))
            .filter(GeneratedPuzzle::is_degraded)
            .map(|puzzle| (puzzle.config.seed, puzzle.pairs.len()))
            .collect::<Vec<_>>();
        println!("Scanned {count} seeds, {} degraded:", degraded.len());
        for (seed, pairs) in degraded {
            println!("  seed {seed}: {pairs} pairs");
        }
        return;
    }

    let seed = match (args.seed, &args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => seed::seed_from_phrase(phrase),
        (None, None) => seed::random_seed(),
    };
    let puzzle = generator.generate(PuzzleConfig::new(seed, args.difficulty, args.size));
    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.config.seed);
    println!();

    println!("Pairs:");
    for pair in &puzzle.pairs {
        println!(
            "  {:>2} {:>2}  sum {:>3}  product {:>4}",
            pair.a, pair.b, pair.sum, pair.product
        );
    }
    println!();

    println!("Grid:");
    for row in puzzle.grid.chunks(4) {
        let values = row
            .iter()
            .map(|challenge| format!("{:>4}", challenge.value))
            .collect::<Vec<_>>();
        println!("  {}", values.join(" "));
    }
    println!();

    let strip = puzzle
        .strip
        .values
        .iter()
        .map(|value| value.map_or_else(|| "__".to_owned(), |v| format!("{v:>2}")))
        .collect::<Vec<_>>();
    println!("Strip:");
    println!("  {}", strip.join(" "));

    if puzzle.is_degraded() {
        println!();
        println!("Warning: only {} pairs could be generated.", puzzle.pairs.len());
    }
}
