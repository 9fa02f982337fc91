//! Deterministic Tetonor puzzle generation.
//!
//! A puzzle is a pure function of its [`PuzzleConfig`]: the same seed, difficulty
//! and size always produce the same pairs, grid order and hidden strip positions.
//!
//! Generation runs in three steps:
//!
//! 1. [`generate_pairs`] draws unique operand pairs from the seed.
//! 2. [`generate_grid`] turns every pair into a sum and a product challenge and
//!    shuffles them.
//! 3. [`generate_strip`] sorts all operands and hides a share of them.
//!
//! # Examples
//!
//! ```
//! use tetonor_core::{Difficulty, GridSize, PuzzleConfig};
//! use tetonor_generator::PuzzleGenerator;
//!
//! let config = PuzzleConfig::new(1, Difficulty::Hard, GridSize::Classic);
//! let puzzle = PuzzleGenerator::new().generate(config);
//!
//! assert_eq!(puzzle.pairs.len(), 8);
//! assert_eq!(puzzle.grid.len(), 16);
//! assert_eq!(puzzle.strip.hidden_count(), 8);
//! assert_eq!(puzzle, PuzzleGenerator::new().generate(config));
//! ```

use serde::{Deserialize, Serialize};
use tetonor_core::{Pair, PuzzleConfig};

pub use self::{grid::*, pairs::*, strip::*};

mod grid;
mod pairs;
pub mod random;
pub mod seed;
mod strip;

/// An immutable generated puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    /// Configuration the puzzle was generated from.
    pub config: PuzzleConfig,
    /// Operand pairs, in generation order.
    pub pairs: Vec<Pair>,
    /// Shuffled challenges, two per pair.
    pub grid: Vec<Challenge>,
    /// The ascending operand strip.
    pub strip: Strip,
}

impl GeneratedPuzzle {
    /// Returns `true` if fewer pairs than requested could be generated.
    ///
    /// A degraded puzzle is still consistent and playable, only smaller.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.pairs.len() < self.config.size.pair_count()
    }
}

/// Builds puzzles from configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    max_attempts: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Creates a generator with the default pair attempt budget.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many pair draws are tried before generation settles for fewer pairs.
    #[must_use]
    pub const fn with_max_attempts(self, max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Generates the puzzle for `config`.
    #[must_use]
    pub fn generate(&self, config: PuzzleConfig) -> GeneratedPuzzle {
        let PuzzleConfig {
            seed,
            difficulty,
            size,
        } = config;
        let pairs = generate_pairs(seed, size.pair_count(), self.max_attempts);
        let grid = generate_grid(&pairs, seed);
        let strip = generate_strip(&pairs, difficulty, seed);
        log::debug!(
            "generated puzzle seed={seed} difficulty={difficulty} size={size} pairs={}",
            pairs.len()
        );
        GeneratedPuzzle {
            config,
            pairs,
            grid,
            strip,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tetonor_core::{Difficulty, GridSize, Operation};

    use super::*;

    fn arb_config() -> impl Strategy<Value = PuzzleConfig> {
        (
            any::<u32>(),
            prop::sample::select(Difficulty::ALL.to_vec()),
            prop::sample::select(vec![GridSize::Small, GridSize::Classic]),
        )
            .prop_map(|(seed, difficulty, size)| PuzzleConfig::new(seed, difficulty, size))
    }

    #[test]
    fn test_seed_one_easy_classic() {
        let config = PuzzleConfig::new(1, Difficulty::Easy, GridSize::Classic);
        let puzzle = PuzzleGenerator::new().generate(config);

        assert_eq!(puzzle.pairs.len(), 8);
        assert_eq!(puzzle.grid.len(), 16);
        assert_eq!(puzzle.strip.len(), 16);
        assert!(puzzle.strip.values.iter().all(Option::is_some));

        let mut operands = puzzle
            .pairs
            .iter()
            .flat_map(|pair| [pair.a, pair.b])
            .collect::<Vec<_>>();
        operands.sort_unstable();
        assert_eq!(puzzle.strip.solution, operands);
        assert!(!puzzle.is_degraded());
    }

    #[test]
    fn test_difficulty_does_not_change_pairs_or_grid() {
        let easy = PuzzleGenerator::new().generate(PuzzleConfig::new(
            77,
            Difficulty::Easy,
            GridSize::Classic,
        ));
        let hard = PuzzleGenerator::new().generate(PuzzleConfig::new(
            77,
            Difficulty::Hard,
            GridSize::Classic,
        ));
        assert_eq!(easy.pairs, hard.pairs);
        assert_eq!(easy.grid, hard.grid);
        assert_eq!(easy.strip.solution, hard.strip.solution);
    }

    #[test]
    fn test_degraded_generation_stays_consistent() {
        let config = PuzzleConfig::new(5, Difficulty::Hard, GridSize::Classic);
        let puzzle = PuzzleGenerator::new().with_max_attempts(2).generate(config);

        assert!(puzzle.is_degraded());
        assert!(puzzle.pairs.len() <= 2);
        assert_eq!(puzzle.grid.len(), 2 * puzzle.pairs.len());
        assert_eq!(puzzle.strip.len(), 2 * puzzle.pairs.len());
        assert_eq!(
            puzzle.strip.hidden_count(),
            Difficulty::Hard.hidden_count(puzzle.strip.len())
        );
    }

    proptest! {
        #[test]
        fn test_generation_is_deterministic(config in arb_config()) {
            let generator = PuzzleGenerator::new();
            prop_assert_eq!(generator.generate(config), generator.generate(config));
        }

        #[test]
        fn test_grid_references_every_pair_twice(config in arb_config()) {
            let puzzle = PuzzleGenerator::new().generate(config);
            prop_assert_eq!(puzzle.grid.len(), 2 * puzzle.pairs.len());
            for (pair_index, pair) in puzzle.pairs.iter().enumerate() {
                for operation in Operation::ALL {
                    let matching = puzzle
                        .grid
                        .iter()
                        .filter(|c| c.pair_index == pair_index && c.operation == operation)
                        .collect::<Vec<_>>();
                    prop_assert_eq!(matching.len(), 1);
                    prop_assert_eq!(matching[0].value, pair.result(operation));
                }
            }
        }
    }
}
