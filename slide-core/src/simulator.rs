//! Trial simulator: the free/sliding state machine.
//!
//! # State Machine
//!
//! ```text
//!             on rail, not sliding
//!             (draw slide length, attach += 1)
//!   Free3D  ──────────────────────────────▶  Sliding1D
//!     ▲                                        │  remaining > 0:
//!     │  remaining == 0:                       │  ±x move, 1D += 1
//!     │  detach move (±y/±z), 3D += 1          │
//!     └────────────────────────────────────────┘
//! ```
//!
//! While free, the particle takes one of the six unit moves and the 3D counter
//! advances. A zero-length slide attaches and detaches on the same step, so
//! with a mean sliding length of zero no 1D step is ever taken.
//!
//! The walk ends as soon as the particle stands on a target. Targets lie on
//! rails, so the final site is always on a rail as well; both facts are
//! asserted before a result is returned.

use log::{debug, warn};
use rand::Rng;
use rand::distr::Distribution;

use crate::error::SimError;
use crate::lattice::{
    DEFAULT_SIDE_LENGTH, DETACH_MOVES, Direction, FREE_MOVES, Lattice, RailLayout, SLIDE_MOVES,
    Site, check_side_length,
};
use crate::sliding::SlidingLength;

/// Step count after which a still-running walk emits a warning.
pub const DEFAULT_SOFT_STEP_LIMIT: u64 = 100_000_000;

/// Motion regime of the particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Unconstrained diffusion over the six neighbours.
    Free3D,
    /// Constrained to the current rail, ±x moves only.
    Sliding1D,
}

/// Per-trial parameters swept by the orchestration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialParams {
    /// Mean sliding duration in steps.
    pub avg_sliding_len: u64,
    /// Number of rails carrying a target.
    pub num_target_lines: usize,
}

impl TrialParams {
    /// Create trial parameters.
    pub const fn new(avg_sliding_len: u64, num_target_lines: usize) -> Self {
        Self {
            avg_sliding_len,
            num_target_lines,
        }
    }
}

/// Step counts of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrialResult {
    /// Steps taken while sliding.
    pub iterations_1d: u64,
    /// Steps taken while diffusing freely, including detach steps.
    pub iterations_3d: u64,
    /// Number of free-to-sliding transitions.
    pub attach_events: u64,
}

impl TrialResult {
    /// Total search time in steps.
    pub fn total_steps(&self) -> u64 {
        self.iterations_1d + self.iterations_3d
    }
}

/// Lattice and step-limit settings shared by every trial of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Lattice side length `L`; also the number of rails.
    pub side_length: usize,
    /// How rail cross-sections are generated.
    pub rail_layout: RailLayout,
    /// Warn once when a walk reaches this many steps.
    pub soft_step_limit: u64,
    /// Abort the trial with an error when it reaches this many steps.
    pub max_steps: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            side_length: DEFAULT_SIDE_LENGTH,
            rail_layout: RailLayout::Permutation,
            soft_step_limit: DEFAULT_SOFT_STEP_LIMIT,
            max_steps: None,
        }
    }
}

impl SimConfig {
    /// Sets the lattice side length.
    #[must_use]
    pub const fn side_length(mut self, side_length: usize) -> Self {
        self.side_length = side_length;
        self
    }

    /// Sets the rail layout.
    #[must_use]
    pub const fn rail_layout(mut self, layout: RailLayout) -> Self {
        self.rail_layout = layout;
        self
    }

    /// Sets the warning threshold.
    #[must_use]
    pub const fn soft_step_limit(mut self, limit: u64) -> Self {
        self.soft_step_limit = limit;
        self
    }

    /// Sets the hard step ceiling.
    #[must_use]
    pub const fn max_steps(mut self, limit: Option<u64>) -> Self {
        self.max_steps = limit;
        self
    }

    /// Check the configuration, and `params` against it.
    ///
    /// # Errors
    ///
    /// Fails on a side length that is zero or above
    /// [`MAX_SIDE_LENGTH`](crate::lattice::MAX_SIDE_LENGTH), a zero hard
    /// limit, or a target line count outside `1..=side_length`.
    pub fn validate(&self, params: &TrialParams) -> Result<(), SimError> {
        check_side_length(self.side_length)?;
        if self.max_steps == Some(0) {
            return Err(SimError::InvalidConfig("max_steps must be positive".into()));
        }
        if params.num_target_lines == 0 || params.num_target_lines > self.side_length {
            return Err(SimError::InvalidTargetLines {
                requested: params.num_target_lines,
                side_length: self.side_length,
            });
        }
        Ok(())
    }
}

/// Result of a completed walk together with where it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Step counts.
    pub result: TrialResult,
    /// The target site the walk ended on.
    pub final_site: Site,
}

#[inline]
fn choose<R: Rng + ?Sized>(moves: &[Direction], rng: &mut R) -> Direction {
    moves[rng.random_range(0..moves.len())]
}

/// Particle state for one walk.
#[derive(Debug, Clone)]
pub struct Walker {
    position: Site,
    regime: Regime,
    remaining_slide: u64,
    counts: TrialResult,
}

impl Walker {
    /// A free particle at `start` with zeroed counters.
    pub fn new(start: Site) -> Self {
        Self {
            position: start,
            regime: Regime::Free3D,
            remaining_slide: 0,
            counts: TrialResult::default(),
        }
    }

    /// Current position.
    pub fn position(&self) -> Site {
        self.position
    }

    /// Current regime.
    pub fn regime(&self) -> Regime {
        self.regime
    }

    /// Sliding steps left in the current slide.
    pub fn remaining_slide(&self) -> u64 {
        self.remaining_slide
    }

    /// Counters accumulated so far.
    pub fn counts(&self) -> TrialResult {
        self.counts
    }

    /// Advance the walk by one step.
    ///
    /// # Panics
    ///
    /// Panics if a sliding step is attempted off a rail or a move leaves the
    /// lattice.
    pub fn step<R: Rng + ?Sized>(&mut self, lattice: &Lattice, sliding: &SlidingLength, rng: &mut R) {
        let on_rail = lattice.on_rail(&self.position);

        if on_rail && self.regime == Regime::Free3D {
            self.remaining_slide = sliding.sample(rng);
            self.regime = Regime::Sliding1D;
            self.counts.attach_events += 1;
        }

        let direction = if self.remaining_slide > 0 {
            assert!(
                on_rail,
                "sliding step requested off rail at {:?}",
                self.position
            );
            self.counts.iterations_1d += 1;
            self.remaining_slide -= 1;
            choose(&SLIDE_MOVES, rng)
        } else {
            self.counts.iterations_3d += 1;
            if self.regime == Regime::Sliding1D {
                self.regime = Regime::Free3D;
                choose(&DETACH_MOVES, rng)
            } else {
                choose(&FREE_MOVES, rng)
            }
        };

        self.position = lattice.step(self.position, direction);
    }

    /// Walk until a target is reached.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::StepLimitExceeded`] if `config.max_steps` is reached
    /// first.
    ///
    /// # Panics
    ///
    /// Panics if the walk ends anywhere other than a target on a rail.
    pub fn run<R: Rng + ?Sized>(
        mut self,
        lattice: &Lattice,
        sliding: &SlidingLength,
        config: &SimConfig,
        rng: &mut R,
    ) -> Result<TrialOutcome, SimError> {
        let mut warned = false;

        while !lattice.on_target(&self.position) {
            let steps = self.counts.total_steps();
            if let Some(limit) = config.max_steps {
                if steps >= limit {
                    return Err(SimError::StepLimitExceeded {
                        limit,
                        partial: self.counts,
                    });
                }
            }
            if !warned && steps >= config.soft_step_limit {
                warn!(
                    "walk still searching after {} steps (avgSlidingLen = {}, targets = {}, attach events = {})",
                    steps,
                    sliding.mean(),
                    lattice.targets().len(),
                    self.counts.attach_events
                );
                warned = true;
            }
            self.step(lattice, sliding, rng);
        }

        assert!(
            lattice.targets().contains(&self.position),
            "walk stopped at {:?}, which is not a target",
            self.position
        );
        assert!(
            lattice.on_rail(&self.position),
            "walk ended off rail at {:?}",
            self.position
        );

        Ok(TrialOutcome {
            result: self.counts,
            final_site: self.position,
        })
    }
}

/// Run one trial on a freshly generated lattice from a uniform random start.
///
/// # Errors
///
/// Fails on invalid configuration or parameters, or when the hard step limit
/// is reached.
pub fn simulate<R: Rng + ?Sized>(
    config: &SimConfig,
    params: &TrialParams,
    rng: &mut R,
) -> Result<TrialOutcome, SimError> {
    config.validate(params)?;

    let sliding = SlidingLength::new(params.avg_sliding_len)?;
    let lattice = Lattice::generate(
        config.side_length,
        config.rail_layout,
        params.num_target_lines,
        rng,
    )?;
    let start = lattice.random_site(rng);

    let outcome = Walker::new(start).run(&lattice, &sliding, config, rng)?;
    debug!(
        "trial done: start={:?} end={:?} 1D={} 3D={} attaches={}",
        start,
        outcome.final_site,
        outcome.result.iterations_1d,
        outcome.result.iterations_3d,
        outcome.result.attach_events
    );
    Ok(outcome)
}

/// Run one trial and return its step counts.
///
/// # Errors
///
/// See [`simulate`].
pub fn run_trial<R: Rng + ?Sized>(
    config: &SimConfig,
    params: &TrialParams,
    rng: &mut R,
) -> Result<TrialResult, SimError> {
    simulate(config, params, rng).map(|outcome| outcome.result)
}
