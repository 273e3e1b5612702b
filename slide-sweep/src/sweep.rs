//! Parallel execution of a sweep.
//!
//! Trial durations vary by orders of magnitude, so every trial is submitted to
//! the rayon pool on its own (`with_max_len(1)`) and work stealing balances
//! the load. Each trial owns an independently seeded generator derived from
//! the sweep seed, the configuration index and the repetition index, which
//! keeps results identical for a given seed whatever the thread count.

use std::time::Instant;

use log::info;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use slide_core::{SimConfig, SimError, run_trial};

use crate::grid::SweepGrid;
use crate::stats::TrialRow;

/// Seed for one trial of a sweep.
///
/// Distinct `(config_idx, repetition)` pairs give distinct seeds for
/// repetitions below 2^32.
pub fn trial_seed(seed: u64, config_idx: usize, repetition: usize) -> u64 {
    // SplitMix64 finalizer
    let mut z = seed ^ ((config_idx as u64) << 32) ^ (repetition as u64);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Run every trial of `grid` and return rows in grid order.
///
/// # Errors
///
/// Fails on an invalid grid, or with the first trial error (such as a hard
/// step limit) encountered.
pub fn run_sweep(grid: &SweepGrid, config: &SimConfig, seed: u64) -> Result<Vec<TrialRow>, SimError> {
    grid.validate(config)?;

    let mut rows = Vec::with_capacity(grid.total_trials());

    for (config_idx, params) in grid.configurations().enumerate() {
        info!(
            "Running avgSlidingLen = {}, numLines = {} ({}/{})",
            params.avg_sliding_len,
            params.num_target_lines,
            config_idx + 1,
            grid.num_configurations()
        );
        let t0 = Instant::now();

        let batch: Vec<TrialRow> = (0..grid.repetitions)
            .into_par_iter()
            .with_max_len(1)
            .map(|rep| {
                let mut rng =
                    Xoshiro256PlusPlus::seed_from_u64(trial_seed(seed, config_idx, rep));
                run_trial(config, &params, &mut rng).map(|result| TrialRow::new(&params, result))
            })
            .collect::<Result<Vec<_>, SimError>>()?;

        info!(
            "  {} trials in {:.2}s",
            batch.len(),
            t0.elapsed().as_secs_f64()
        );
        rows.extend(batch);
    }

    Ok(rows)
}
