use std::collections::HashSet;

use tetonor_core::{MAX_OPERAND, MIN_OPERAND, Pair};

use crate::random::random_in_range;

/// Default number of draws before pair generation gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Generates up to `count` unique operand pairs from `seed`.
///
/// Each attempt draws two operands in `[1, 50]` with consecutive indices. A pair
/// is accepted only if neither its operands nor its `(sum, product)` signature were
/// seen before and its sum differs from its product.
///
/// If `max_attempts` runs out first, the pairs found so far are returned and a
/// warning is logged. Callers must handle a shorter list.
///
/// # Example
///
/// ```
/// use tetonor_generator::{DEFAULT_MAX_ATTEMPTS, generate_pairs};
///
/// let pairs = generate_pairs(1, 8, DEFAULT_MAX_ATTEMPTS);
/// assert_eq!(pairs.len(), 8);
/// assert!(pairs.iter().all(|pair| pair.a <= pair.b));
/// ```
#[must_use]
pub fn generate_pairs(seed: u32, count: usize, max_attempts: usize) -> Vec<Pair> {
    let seed = f64::from(seed);
    let mut pairs = Vec::with_capacity(count);
    let mut used_operands = HashSet::new();
    let mut used_signatures = HashSet::new();
    let mut index = 0u32;

    for _ in 0..max_attempts {
        if pairs.len() >= count {
            break;
        }

        let x = random_in_range(seed, f64::from(index), MIN_OPERAND, MAX_OPERAND);
        let y = random_in_range(seed, f64::from(index + 1), MIN_OPERAND, MAX_OPERAND);
        index += 2;

        let pair = Pair::new(x, y);
        if !pair.has_distinct_results()
            || used_operands.contains(&pair.operands())
            || used_signatures.contains(&pair.signature())
        {
            continue;
        }
        used_operands.insert(pair.operands());
        used_signatures.insert(pair.signature());
        pairs.push(pair);
    }

    if pairs.len() < count {
        log::warn!(
            "only {} of {count} unique pairs generated for seed {seed} within {max_attempts} attempts",
            pairs.len(),
        );
    }

    pairs
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn assert_unique(pairs: &[Pair]) {
        let operands = pairs.iter().map(Pair::operands).collect::<HashSet<_>>();
        let signatures = pairs.iter().map(Pair::signature).collect::<HashSet<_>>();
        assert_eq!(operands.len(), pairs.len());
        assert_eq!(signatures.len(), pairs.len());
        assert!(pairs.iter().all(Pair::has_distinct_results));
    }

    #[test]
    fn test_seed_one_yields_eight_unique_pairs() {
        let pairs = generate_pairs(1, 8, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(pairs.len(), 8);
        assert_unique(&pairs);
    }

    #[test]
    fn test_seed_one_reference_pairs() {
        let pairs = generate_pairs(1, 8, DEFAULT_MAX_ATTEMPTS)
            .iter()
            .map(Pair::operands)
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                (3, 47),
                (19, 28),
                (23, 32),
                (9, 17),
                (27, 49),
                (9, 42),
                (41, 50),
                (23, 47),
            ]
        );
    }

    #[test]
    fn test_exhausted_budget_returns_partial_set() {
        let pairs = generate_pairs(1, 8, 3);
        assert!(pairs.len() <= 3);
        assert_unique(&pairs);

        assert!(generate_pairs(1, 8, 0).is_empty());
    }

    #[test]
    fn test_zero_count() {
        assert!(generate_pairs(7, 0, DEFAULT_MAX_ATTEMPTS).is_empty());
    }

    #[test]
    fn test_partial_set_is_prefix_of_full_set() {
        let full = generate_pairs(99, 8, DEFAULT_MAX_ATTEMPTS);
        let partial = generate_pairs(99, 4, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(&full[..4], &partial[..]);
    }

    proptest! {
        #[test]
        fn test_pairs_are_unique_and_in_range(seed in any::<u32>(), count in 0usize..=8) {
            let pairs = generate_pairs(seed, count, DEFAULT_MAX_ATTEMPTS);
            prop_assert!(pairs.len() <= count);
            assert_unique(&pairs);
            for pair in &pairs {
                prop_assert!(pair.a <= pair.b);
                prop_assert!((MIN_OPERAND..=MAX_OPERAND).contains(&pair.a));
                prop_assert!((MIN_OPERAND..=MAX_OPERAND).contains(&pair.b));
            }
        }

        #[test]
        fn test_pairs_are_deterministic(seed in any::<u32>()) {
            prop_assert_eq!(
                generate_pairs(seed, 8, DEFAULT_MAX_ATTEMPTS),
                generate_pairs(seed, 8, DEFAULT_MAX_ATTEMPTS)
            );
        }
    }
}
