//! # slide-core: facilitated-diffusion search on a periodic lattice
//!
//! A particle random-walks on an `L x L x L` periodic cubic lattice. Embedded
//! in the lattice are `L` rails parallel to the x axis; whenever the particle
//! lands on a rail it may slide along it for a random number of steps before
//! diffusing freely again. The walk ends when the particle reaches one of the
//! target sites placed on a subset of the rails.
//!
//! Each trial reports how many steps were spent in each regime, which is the
//! quantity of interest when comparing pure 3D search against search with
//! intermittent 1D sliding.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use slide_core::{run_trial, SimConfig, TrialParams};
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
//! let result = run_trial(&SimConfig::default(), &TrialParams::new(10, 30), &mut rng)?;
//! println!("1D: {}, 3D: {}", result.iterations_1d, result.iterations_3d);
//! ```
//!
//! ## Module Organization
//!
//! - [`sampling`] - Sampling without replacement
//! - [`lattice`] - Sites, rails, targets, periodic moves
//! - [`sliding`] - Sliding-duration distribution
//! - [`simulator`] - The free/sliding state machine and trial entry points
//! - [`error`] - Error type
//!
//! Randomness is always supplied by the caller. Nothing in this crate owns a
//! generator, so independent trials can run on independent threads with
//! independently seeded generators.

pub mod error;
pub mod lattice;
pub mod sampling;
pub mod simulator;
pub mod sliding;

pub use error::SimError;
pub use lattice::{
    DEFAULT_SIDE_LENGTH, DETACH_MOVES, Direction, FREE_MOVES, Lattice, MAX_SIDE_LENGTH, Rail,
    RailLayout, SLIDE_MOVES, Site, check_side_length, generate_lines, generate_targets, modulus,
};
pub use sampling::{sample_distinct_pairs, sample_without_replacement};
pub use simulator::{
    DEFAULT_SOFT_STEP_LIMIT, Regime, SimConfig, TrialOutcome, TrialParams, TrialResult, Walker,
    run_trial, simulate,
};
pub use sliding::SlidingLength;
