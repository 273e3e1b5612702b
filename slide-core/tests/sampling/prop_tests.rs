//! Property-based tests for sampling without replacement.

use proptest::prelude::*;
use slide_core::{SimError, sample_distinct_pairs, sample_without_replacement};

use crate::common;

proptest! {
    /// Exactly `count` values, all distinct, all in `0..domain_size`.
    #[test]
    fn prop_sample_distinct_and_in_range(
        domain_size in 0usize..500,
        frac in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let count = (domain_size as f64 * frac) as usize;
        let mut rng = common::rng(seed);
        let sample = sample_without_replacement(domain_size, count, &mut rng).unwrap();

        prop_assert_eq!(sample.len(), count);
        prop_assert!(sample.iter().all(|&v| v < domain_size));

        let mut sorted = sample.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), count, "duplicate values in {:?}", sample);
    }

    /// Oversized requests are rejected, never truncated.
    #[test]
    fn prop_oversized_request_rejected(domain_size in 0usize..200, extra in 1usize..50) {
        let mut rng = common::rng(0);
        let err = sample_without_replacement(domain_size, domain_size + extra, &mut rng).unwrap_err();
        prop_assert_eq!(
            err,
            SimError::SampleTooLarge { domain_size, count: domain_size + extra }
        );
    }

    /// Distinct pairs are unique as 2-tuples and lie in the plane.
    #[test]
    fn prop_distinct_pairs_unique(side in 1usize..40, seed in any::<u64>()) {
        let mut rng = common::rng(seed);
        let mut pairs = sample_distinct_pairs(side, side, &mut rng).unwrap();
        prop_assert!(pairs.iter().all(|&(y, z)| y < side && z < side));
        pairs.sort_unstable();
        pairs.dedup();
        prop_assert_eq!(pairs.len(), side);
    }
}

/// Each of the `n` values should appear in a size-1 sample roughly `1/n` of the time.
#[test]
fn test_sampling_is_uniform() {
    let mut rng = common::rng(99);
    let n = 10;
    let draws = 50_000;
    let mut counts = vec![0usize; n];
    for _ in 0..draws {
        counts[sample_without_replacement(n, 1, &mut rng).unwrap()[0]] += 1;
    }

    let expected = draws as f64 / n as f64;
    for (v, &c) in counts.iter().enumerate() {
        let rel = (c as f64 - expected).abs() / expected;
        assert!(rel < 0.05, "value {} drawn {} times, expected ~{}", v, c, expected);
    }
}
