//! Seeded trigonometric randomness.
//!
//! The generator does not use a general-purpose PRNG: every draw is a pure function
//! of `(seed, index)`. Puzzles shared as a seed (for example the daily puzzle) are
//! reproducible only as long as this exact formula is kept, so it must not be
//! replaced by a statistically better source.

const SEED_MULTIPLIER: f64 = 12.989_8;
const SEED_SCALE: f64 = 43_758.545_3;

/// Index spacing between Fisher-Yates draws.
///
/// Keeps shuffle draws away from the small indices used by pair generation.
const SHUFFLE_INDEX_STRIDE: f64 = 100.0;

/// Returns a pseudo-random number in `[0, 1)` for `(seed, index)`.
///
/// Computes the fractional part of `sin((seed + index) × 12.9898) × 43758.5453`
/// in IEEE-754 double precision.
///
/// Rounding may yield exactly `1.0` for a vanishingly small negative sine; callers
/// scaling the result clamp to their upper bound.
///
/// ```
/// use tetonor_generator::random::seeded_random;
///
/// let x = seeded_random(7.0, 3.0);
/// assert!((0.0..1.0).contains(&x));
/// assert_eq!(x, seeded_random(7.0, 3.0));
/// ```
#[must_use]
pub fn seeded_random(seed: f64, index: f64) -> f64 {
    let x = ((seed + index) * SEED_MULTIPLIER).sin() * SEED_SCALE;
    x - x.floor()
}

/// Returns an integer in `[min, max]` drawn from [`seeded_random`].
#[must_use]
pub fn random_in_range(seed: f64, index: f64, min: u8, max: u8) -> u8 {
    debug_assert!(min <= max);
    let span = f64::from(max - min) + 1.0;
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = (seeded_random(seed, index) * span).floor() as u8;
    // A tiny negative sine can round the fraction up to exactly 1.0.
    min + offset.min(max - min)
}

/// Returns `items` permuted by a seeded Fisher-Yates shuffle.
///
/// Walks from the last index down to 1 and swaps element `i` with element
/// `floor(seeded_random(seed, i × 100) × (i + 1))`.
#[must_use]
pub fn shuffle<T>(mut items: Vec<T>, seed: f64) -> Vec<T> {
    for i in (1..items.len()).rev() {
        #[expect(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let j = {
            let draw = seeded_random(seed, i as f64 * SHUFFLE_INDEX_STRIDE);
            ((draw * (i + 1) as f64).floor() as usize).min(i)
        };
        items.swap(i, j);
    }
    items
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_seeded_random_origin_is_zero() {
        assert_eq!(seeded_random(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_seed_and_index_are_interchangeable() {
        assert_eq!(seeded_random(5.0, 2.0), seeded_random(2.0, 5.0));
        assert_eq!(seeded_random(5.0, 2.0), seeded_random(7.0, 0.0));
    }

    #[test]
    fn test_shuffle_of_short_inputs() {
        assert_eq!(shuffle(Vec::<u8>::new(), 1.0), Vec::<u8>::new());
        assert_eq!(shuffle(vec![42], 1.0), vec![42]);
    }

    proptest! {
        #[test]
        fn test_seeded_random_in_unit_interval(seed in 0u32..2_000_000, index in 0u32..40_000) {
            let x = seeded_random(f64::from(seed), f64::from(index));
            prop_assert!((0.0..=1.0).contains(&x));
        }

        #[test]
        fn test_random_in_range_is_bounded(seed in 0u32..2_000_000, index in 0u32..40_000) {
            let value = random_in_range(f64::from(seed), f64::from(index), 1, 50);
            prop_assert!((1..=50).contains(&value));
        }

        #[test]
        fn test_shuffle_is_deterministic_permutation(seed in 0u32..2_000_000, len in 0usize..32) {
            let items = (0..len).collect::<Vec<_>>();
            let shuffled = shuffle(items.clone(), f64::from(seed));
            prop_assert_eq!(&shuffled, &shuffle(items.clone(), f64::from(seed)));

            let mut sorted = shuffled;
            sorted.sort_unstable();
            prop_assert_eq!(sorted, items);
        }
    }
}
