//! Shared test utilities for slide-core tests.

#![allow(dead_code)] // Not all test files use all functions

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use slide_core::{Lattice, SimConfig, TrialParams, TrialResult, run_trial};

/// Deterministic generator for a test.
pub fn rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Run `trials` independent trials from a single seeded stream.
pub fn run_many(config: &SimConfig, params: &TrialParams, trials: usize, seed: u64) -> Vec<TrialResult> {
    let mut rng = rng(seed);
    (0..trials)
        .map(|_| run_trial(config, params, &mut rng).expect("trial failed"))
        .collect()
}

/// Mean total search time over a set of results.
pub fn mean_total_steps(results: &[TrialResult]) -> f64 {
    let sum: u64 = results.iter().map(|r| r.total_steps()).sum();
    sum as f64 / results.len() as f64
}

/// Brute-force rail check: scan every rail, as opposed to the bitset lookup.
pub fn on_rail_by_scan(lattice: &Lattice, y: usize, z: usize) -> bool {
    lattice.rails().iter().any(|r| r.y == y && r.z == z)
}
