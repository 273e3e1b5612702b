//! Error type for trial setup and execution.
//!
//! Only precondition failures and the hard step limit surface as errors.
//! Broken invariants inside a running walk (sliding off a rail, an
//! out-of-range coordinate) are logic defects and panic instead.

use crate::simulator::TrialResult;

/// Errors reported by the sampling, lattice and simulator modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// More distinct samples were requested than the domain holds.
    SampleTooLarge {
        /// Size of the domain `0..domain_size`.
        domain_size: usize,
        /// Number of samples requested.
        count: usize,
    },
    /// Lattice side length must be at least 1.
    EmptyLattice,
    /// Lattice side length above the supported ceiling.
    SideLengthTooLarge {
        /// Requested side length.
        side_length: usize,
        /// Largest accepted side length.
        max: usize,
    },
    /// Target line count outside `1..=side_length`.
    InvalidTargetLines {
        /// Requested number of target lines.
        requested: usize,
        /// Lattice side length (number of rails).
        side_length: usize,
    },
    /// Invalid configuration value.
    InvalidConfig(String),
    /// The walk hit the configured hard step ceiling before reaching a target.
    StepLimitExceeded {
        /// The ceiling that was reached.
        limit: u64,
        /// Counts accumulated up to the ceiling. Not a valid trial result.
        partial: TrialResult,
    },
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::SampleTooLarge { domain_size, count } => write!(
                f,
                "Cannot draw {} distinct samples from a domain of size {}",
                count, domain_size
            ),
            SimError::EmptyLattice => write!(f, "Lattice side length must be positive"),
            SimError::SideLengthTooLarge { side_length, max } => write!(
                f,
                "Lattice side length {} exceeds the maximum of {}",
                side_length, max
            ),
            SimError::InvalidTargetLines {
                requested,
                side_length,
            } => write!(
                f,
                "Number of target lines must be in 1..={}, got {}",
                side_length, requested
            ),
            SimError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SimError::StepLimitExceeded { limit, partial } => write!(
                f,
                "Walk exceeded {} steps without reaching a target ({} 1D, {} 3D)",
                limit, partial.iterations_1d, partial.iterations_3d
            ),
        }
    }
}

impl std::error::Error for SimError {}
