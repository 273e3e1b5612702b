//! Property-based tests for completed walks.

use proptest::prelude::*;
use slide_core::{Lattice, RailLayout, SimConfig, SlidingLength, TrialParams, Walker, simulate};

use crate::common;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A finished walk stands on a target, and that target is on a rail.
    #[test]
    fn prop_walk_ends_on_target_and_rail(
        side in 2usize..12,
        frac in 0.0f64..=1.0,
        avg_sliding_len in 0u64..30,
        seed in any::<u64>(),
    ) {
        let num_targets = ((side as f64 * frac) as usize).clamp(1, side);
        let mut rng = common::rng(seed);
        let config = SimConfig::default().side_length(side);

        let lattice = Lattice::generate(side, RailLayout::Permutation, num_targets, &mut rng).unwrap();
        let sliding = SlidingLength::new(avg_sliding_len).unwrap();
        let start = lattice.random_site(&mut rng);

        let outcome = Walker::new(start).run(&lattice, &sliding, &config, &mut rng).unwrap();

        prop_assert!(lattice.targets().contains(&outcome.final_site));
        prop_assert!(lattice.on_rail(&outcome.final_site));
        prop_assert!(outcome.result.attach_events <= outcome.result.iterations_3d + 1);
    }

    /// Without sliding no 1D step is ever counted.
    #[test]
    fn prop_zero_sliding_never_slides(
        side in 2usize..12,
        num_targets in 1usize..3,
        seed in any::<u64>(),
    ) {
        let config = SimConfig::default().side_length(side);
        let params = TrialParams::new(0, num_targets.min(side));
        let outcome = simulate(&config, &params, &mut common::rng(seed)).unwrap();
        prop_assert_eq!(outcome.result.iterations_1d, 0);
    }

    /// Same seed, same trial.
    #[test]
    fn prop_trials_reproducible(seed in any::<u64>(), avg_sliding_len in 0u64..20) {
        let config = SimConfig::default().side_length(8);
        let params = TrialParams::new(avg_sliding_len, 2);
        let a = simulate(&config, &params, &mut common::rng(seed)).unwrap();
        let b = simulate(&config, &params, &mut common::rng(seed)).unwrap();
        prop_assert_eq!(a, b);
    }
}
