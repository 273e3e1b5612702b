//! Parameter grid for a sweep.

use slide_core::{SimConfig, SimError, TrialParams};

/// Mean sliding lengths of the reference sweep.
pub const DEFAULT_SLIDING_LENGTHS: &[u64] = &[
    0, 5, 10, 30, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1100, 1200, 1300,
];

/// Target line counts of the reference sweep.
pub const DEFAULT_NUM_LINES: &[usize] = &[1, 10, 30, 50, 70, 100];

/// Trials per configuration in the reference sweep.
pub const DEFAULT_REPETITIONS: usize = 2 * 1024;

/// Cartesian product of sliding lengths and target line counts, with a
/// repetition count per configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepGrid {
    /// Mean sliding lengths (outer loop).
    pub sliding_lengths: Vec<u64>,
    /// Target line counts (inner loop).
    pub num_lines: Vec<usize>,
    /// Independent trials per configuration.
    pub repetitions: usize,
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            sliding_lengths: DEFAULT_SLIDING_LENGTHS.to_vec(),
            num_lines: DEFAULT_NUM_LINES.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl SweepGrid {
    /// Configurations in sweep order: sliding length outer, line count inner.
    pub fn configurations(&self) -> impl Iterator<Item = TrialParams> + '_ {
        self.sliding_lengths.iter().flat_map(move |&m| {
            self.num_lines
                .iter()
                .map(move |&k| TrialParams::new(m, k))
        })
    }

    /// Number of configurations.
    pub fn num_configurations(&self) -> usize {
        self.sliding_lengths.len() * self.num_lines.len()
    }

    /// Number of trials the sweep will run.
    pub fn total_trials(&self) -> usize {
        self.num_configurations() * self.repetitions
    }

    /// Check every configuration against the simulation settings.
    ///
    /// # Errors
    ///
    /// Fails on an empty grid axis, zero repetitions, or any configuration
    /// rejected by [`SimConfig::validate`].
    pub fn validate(&self, config: &SimConfig) -> Result<(), SimError> {
        if self.sliding_lengths.is_empty() || self.num_lines.is_empty() {
            return Err(SimError::InvalidConfig("sweep grid has an empty axis".into()));
        }
        if self.repetitions == 0 {
            return Err(SimError::InvalidConfig("repetitions must be positive".into()));
        }
        for params in self.configurations() {
            config.validate(&params)?;
        }
        Ok(())
    }
}
