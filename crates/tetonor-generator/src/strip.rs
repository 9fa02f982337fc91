use serde::{Deserialize, Serialize};
use tetonor_core::{Difficulty, Pair};

use crate::random::shuffle;

/// Seed offset that decorrelates the strip shuffle from the grid shuffle.
const STRIP_SEED_OFFSET: f64 = 54_321.0;

/// The ascending list of every operand, partly hidden.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Strip {
    /// Visible operands, `None` where hidden.
    pub values: Vec<Option<u8>>,
    /// Every operand in non-decreasing order.
    pub solution: Vec<u8>,
}

impl Strip {
    /// Number of strip positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solution.len()
    }

    /// Returns `true` if the strip has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solution.is_empty()
    }

    /// Returns `true` if position `index` is hidden from the player.
    ///
    /// Out-of-range positions are not hidden.
    #[must_use]
    pub fn is_hidden(&self, index: usize) -> bool {
        matches!(self.values.get(index), Some(None))
    }

    /// Iterates over the hidden positions in ascending order.
    pub fn hidden_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, value)| value.is_none().then_some(i))
    }

    /// Number of hidden positions.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_none()).count()
    }
}

/// Builds the number strip for `pairs` at `difficulty`.
///
/// All operands are sorted ascending. Then `difficulty.hidden_count(len)` positions,
/// taken from a seeded shuffle of `0..len`, are hidden.
#[must_use]
pub fn generate_strip(pairs: &[Pair], difficulty: Difficulty, seed: u32) -> Strip {
    let mut solution = pairs
        .iter()
        .flat_map(|pair| [pair.a, pair.b])
        .collect::<Vec<_>>();
    solution.sort_unstable();

    let mut values = solution.iter().copied().map(Some).collect::<Vec<_>>();
    let hidden_count = difficulty.hidden_count(solution.len());
    if hidden_count > 0 {
        let positions = (0..solution.len()).collect::<Vec<_>>();
        let positions = shuffle(positions, f64::from(seed) + STRIP_SEED_OFFSET);
        for &index in positions.iter().take(hidden_count) {
            values[index] = None;
        }
    }

    Strip { values, solution }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::pairs::{DEFAULT_MAX_ATTEMPTS, generate_pairs};

    #[test]
    fn test_easy_strip_is_fully_visible() {
        let pairs = generate_pairs(1, 8, DEFAULT_MAX_ATTEMPTS);
        let strip = generate_strip(&pairs, Difficulty::Easy, 1);
        assert_eq!(strip.len(), 16);
        assert_eq!(strip.hidden_count(), 0);
        assert!(strip.solution.is_sorted());
        assert_eq!(
            strip.values,
            strip.solution.iter().copied().map(Some).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_hard_strip_hides_half() {
        let pairs = generate_pairs(1, 8, DEFAULT_MAX_ATTEMPTS);
        let strip = generate_strip(&pairs, Difficulty::Hard, 1);
        assert_eq!(strip.values.iter().filter(|v| v.is_none()).count(), 8);
        assert_eq!(strip.hidden_positions().count(), 8);
    }

    #[test]
    fn test_medium_small_strip_hides_quarter() {
        let pairs = generate_pairs(2, 4, DEFAULT_MAX_ATTEMPTS);
        let strip = generate_strip(&pairs, Difficulty::Medium, 2);
        assert_eq!(strip.len(), 8);
        assert_eq!(strip.hidden_count(), 2);
    }

    #[test]
    fn test_strip_from_no_pairs() {
        let strip = generate_strip(&[], Difficulty::Hard, 3);
        assert!(strip.is_empty());
        assert_eq!(strip.hidden_count(), 0);
        assert!(!strip.is_hidden(0));
    }

    proptest! {
        #[test]
        fn test_visible_positions_match_solution(
            seed in any::<u32>(),
            difficulty in prop::sample::select(Difficulty::ALL.to_vec()),
        ) {
            let pairs = generate_pairs(seed, 8, DEFAULT_MAX_ATTEMPTS);
            let strip = generate_strip(&pairs, difficulty, seed);

            prop_assert!(strip.solution.is_sorted());
            prop_assert_eq!(strip.values.len(), strip.solution.len());
            prop_assert_eq!(strip.hidden_count(), difficulty.hidden_count(strip.len()));
            for (value, solution) in strip.values.iter().zip(&strip.solution) {
                if let Some(value) = value {
                    prop_assert_eq!(value, solution);
                }
            }
        }
    }
}
