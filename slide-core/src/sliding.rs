//! Sliding-duration distribution.
//!
//! A slide of mean length `m` is modelled as a negative binomial with shape 1,
//! i.e. a geometric distribution counting failures before the first success.
//! Moment matching gives
//!
//! ```text
//! a = m + m²
//! b = 1 - (a - m) / a = 1 / (1 + m)
//! E[len] = (1 - b) / b = m
//! ```
//!
//! A mean of zero means the particle never slides: every attachment detaches
//! on the same step.

use rand::Rng;
use rand_distr::{Distribution, Geometric};

use crate::error::SimError;

/// Distribution of the number of 1D steps taken per attachment.
#[derive(Debug, Clone)]
pub enum SlidingLength {
    /// Always zero steps.
    Never,
    /// Geometric with the given mean.
    Geometric {
        /// Target mean sliding length.
        mean: u64,
        /// Underlying failures-before-success distribution.
        dist: Geometric,
    },
}

impl SlidingLength {
    /// Build the distribution for a given mean sliding length.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the derived success probability
    /// is rejected by the geometric sampler.
    pub fn new(mean: u64) -> Result<Self, SimError> {
        if mean == 0 {
            return Ok(SlidingLength::Never);
        }

        let p = success_probability(mean);
        let dist = Geometric::new(p).map_err(|e| {
            SimError::InvalidConfig(format!(
                "sliding length {} gives unusable probability {}: {}",
                mean, p, e
            ))
        })?;

        Ok(SlidingLength::Geometric { mean, dist })
    }

    /// The configured mean.
    pub fn mean(&self) -> u64 {
        match self {
            SlidingLength::Never => 0,
            SlidingLength::Geometric { mean, .. } => *mean,
        }
    }
}

impl Distribution<u64> for SlidingLength {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match self {
            SlidingLength::Never => 0,
            SlidingLength::Geometric { dist, .. } => dist.sample(rng),
        }
    }
}

/// Success probability `b` for a mean sliding length `m > 0`.
pub fn success_probability(mean: u64) -> f64 {
    let m = mean as f64;
    let a = m + m * m;
    1.0 - (a - m) / a
}
