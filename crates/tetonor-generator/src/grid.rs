use serde::{Deserialize, Serialize};
use tetonor_core::{Operation, Pair};

use crate::random::shuffle;

/// Seed offset that decorrelates the grid shuffle from the strip shuffle.
const GRID_SEED_OFFSET: f64 = 12_345.0;

/// One grid challenge: the sum or the product of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Challenge {
    /// Index of the pair in [`GeneratedPuzzle::pairs`](crate::GeneratedPuzzle::pairs).
    pub pair_index: usize,
    /// Operation that produces [`value`](Self::value) from the pair.
    pub operation: Operation,
    /// The number shown to the player.
    pub value: u16,
}

/// Expands every pair into a sum challenge and a product challenge, then shuffles.
///
/// The result always holds `2 × pairs.len()` challenges, two per pair index.
#[must_use]
pub fn generate_grid(pairs: &[Pair], seed: u32) -> Vec<Challenge> {
    let challenges = pairs
        .iter()
        .enumerate()
        .flat_map(|(pair_index, pair)| {
            Operation::ALL.map(|operation| Challenge {
                pair_index,
                operation,
                value: pair.result(operation),
            })
        })
        .collect::<Vec<_>>();
    shuffle(challenges, f64::from(seed) + GRID_SEED_OFFSET)
}
