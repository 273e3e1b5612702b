//! Periodic cubic lattice with x-parallel rails and target sites.
//!
//! # Geometry
//!
//! The lattice is a cube of side `L` with periodic boundaries on all three
//! axes. Rails run parallel to the x axis and are identified by their
//! `(y, z)` pair. Targets are single sites lying on rails.
//!
//! ```text
//!          z
//!          |   rail (y, z) = (2, 1)
//!          |  ==================> x
//!          | /
//!          |/____ y
//! ```
//!
//! # Lookup
//!
//! Rails are kept as an explicit list (generation order) and as a packed
//! bitset with one bit per `(y, z)` cell, so `on_rail` is O(1). Targets are
//! few (at most `L`) and all lie on rails: `on_target` rejects off-rail sites
//! through the bitset and binary-searches a sorted copy of the targets for the
//! rest. Memory therefore grows with `L²`, never `L³`.

use rand::Rng;

use crate::error::SimError;
use crate::sampling::{sample_distinct_pairs, sample_without_replacement};

/// Side length used by the reference experiments.
pub const DEFAULT_SIDE_LENGTH: usize = 100;

/// Largest accepted side length. The rail bitset then takes 32 MiB.
pub const MAX_SIDE_LENGTH: usize = 1 << 14;

/// Check that `side` describes a lattice that can be built.
///
/// # Errors
///
/// Returns [`SimError::EmptyLattice`] if `side == 0` and
/// [`SimError::SideLengthTooLarge`] if `side > MAX_SIDE_LENGTH`.
pub fn check_side_length(side: usize) -> Result<(), SimError> {
    if side == 0 {
        return Err(SimError::EmptyLattice);
    }
    if side > MAX_SIDE_LENGTH {
        return Err(SimError::SideLengthTooLarge {
            side_length: side,
            max: MAX_SIDE_LENGTH,
        });
    }
    Ok(())
}

/// A lattice site. Coordinates always lie in `[0, L)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    /// Position along the rail axis.
    pub x: usize,
    /// First cross-rail coordinate.
    pub y: usize,
    /// Second cross-rail coordinate.
    pub z: usize,
}

impl Site {
    /// Create a site from its coordinates.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// The rail cross-section this site lies in (whether or not a rail exists there).
    pub const fn cross_section(&self) -> Rail {
        Rail {
            y: self.y,
            z: self.z,
        }
    }
}

/// A line of sites parallel to the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rail {
    /// Y coordinate shared by every site on the rail.
    pub y: usize,
    /// Z coordinate shared by every site on the rail.
    pub z: usize,
}

impl Rail {
    /// Create a rail from its cross-section.
    pub const fn new(y: usize, z: usize) -> Self {
        Self { y, z }
    }

    /// The site at position `x` along this rail.
    pub const fn site_at(&self, x: usize) -> Site {
        Site {
            x,
            y: self.y,
            z: self.z,
        }
    }
}

/// One of the six axis-aligned unit moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    PlusX,
    MinusX,
    PlusY,
    MinusY,
    PlusZ,
    MinusZ,
}

impl Direction {
    /// Coordinate offsets `(dx, dy, dz)`.
    pub const fn delta(self) -> (i64, i64, i64) {
        match self {
            Direction::PlusX => (1, 0, 0),
            Direction::MinusX => (-1, 0, 0),
            Direction::PlusY => (0, 1, 0),
            Direction::MinusY => (0, -1, 0),
            Direction::PlusZ => (0, 0, 1),
            Direction::MinusZ => (0, 0, -1),
        }
    }

    /// Whether the move keeps the particle on its current rail cross-section.
    pub const fn is_along_rail(self) -> bool {
        matches!(self, Direction::PlusX | Direction::MinusX)
    }
}

/// Moves available during free 3D diffusion.
pub const FREE_MOVES: [Direction; 6] = [
    Direction::PlusZ,
    Direction::PlusY,
    Direction::PlusX,
    Direction::MinusZ,
    Direction::MinusY,
    Direction::MinusX,
];

/// Moves used on the step that ends a slide. Excludes the rail axis so the
/// particle actually leaves the rail.
pub const DETACH_MOVES: [Direction; 4] = [
    Direction::PlusZ,
    Direction::PlusY,
    Direction::MinusZ,
    Direction::MinusY,
];

/// Moves available while sliding.
pub const SLIDE_MOVES: [Direction; 2] = [Direction::PlusX, Direction::MinusX];

/// Mathematical modulo: the result is in `[0, b)` for every `a`.
///
/// `modulus(-1, 100) == 99`, `modulus(150, 100) == 50`.
///
/// # Panics
///
/// Panics if `b <= 0`.
#[inline]
pub fn modulus(a: i64, b: i64) -> i64 {
    assert!(b > 0, "modulus requires a positive divisor, got {}", b);
    a.rem_euclid(b)
}

/// How rail cross-sections are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RailLayout {
    /// Two independent permutations of `0..L` paired index-wise.
    ///
    /// Each y and each z value is used exactly once, but two slots can in
    /// principle produce the same `(y, z)` pair.
    #[default]
    Permutation,
    /// `L` distinct `(y, z)` pairs sampled from the full `L x L` plane.
    DistinctPairs,
}

/// Generate the `side` rails of a lattice.
///
/// # Errors
///
/// Fails if `side` is rejected by [`check_side_length`].
pub fn generate_lines<R: Rng + ?Sized>(
    side: usize,
    layout: RailLayout,
    rng: &mut R,
) -> Result<Vec<Rail>, SimError> {
    check_side_length(side)?;

    let rails = match layout {
        RailLayout::Permutation => {
            let lines_y = sample_without_replacement(side, side, rng)?;
            let lines_z = sample_without_replacement(side, side, rng)?;
            lines_y
                .into_iter()
                .zip(lines_z)
                .map(|(y, z)| Rail::new(y, z))
                .collect()
        }
        RailLayout::DistinctPairs => sample_distinct_pairs(side, side, rng)?
            .into_iter()
            .map(|(y, z)| Rail::new(y, z))
            .collect(),
    };

    Ok(rails)
}

/// Place `num_target_lines` targets on distinct rails.
///
/// Rails are chosen without replacement; x positions are drawn without
/// replacement from `0..side`, independently of the rail choice, and paired
/// positionally.
///
/// # Errors
///
/// Returns [`SimError::InvalidTargetLines`] unless
/// `1 <= num_target_lines <= min(side, rails.len())`.
pub fn generate_targets<R: Rng + ?Sized>(
    rails: &[Rail],
    side: usize,
    num_target_lines: usize,
    rng: &mut R,
) -> Result<Vec<Site>, SimError> {
    if num_target_lines == 0 || num_target_lines > side.min(rails.len()) {
        return Err(SimError::InvalidTargetLines {
            requested: num_target_lines,
            side_length: side,
        });
    }

    let indices = sample_without_replacement(rails.len(), num_target_lines, rng)?;
    let targets_x = sample_without_replacement(side, num_target_lines, rng)?;

    Ok(indices
        .into_iter()
        .zip(targets_x)
        .map(|(i, x)| rails[i].site_at(x))
        .collect())
}

/// Fixed-size bitset packed into u64 words.
#[derive(Debug, Clone)]
struct BitSet {
    words: Vec<u64>,
}

impl BitSet {
    fn new(bits: usize) -> Self {
        Self {
            words: vec![0u64; bits.div_ceil(64)],
        }
    }

    #[inline]
    fn insert(&mut self, idx: usize) {
        self.words[idx / 64] |= 1u64 << (idx % 64);
    }

    #[inline]
    fn contains(&self, idx: usize) -> bool {
        self.words[idx / 64] & (1u64 << (idx % 64)) != 0
    }
}

/// Rails and targets of a single trial.
#[derive(Debug, Clone)]
pub struct Lattice {
    side: usize,
    rails: Vec<Rail>,
    targets: Vec<Site>,
    sorted_targets: Vec<Site>,
    rail_mask: BitSet,
}

impl Lattice {
    /// Generate a fresh rail set and target set.
    ///
    /// # Errors
    ///
    /// Fails if `side` is zero or above [`MAX_SIDE_LENGTH`], or if
    /// `num_target_lines` is not in `1..=side`.
    ///
    /// # Panics
    ///
    /// Panics if a generated target does not lie on a rail.
    pub fn generate<R: Rng + ?Sized>(
        side: usize,
        layout: RailLayout,
        num_target_lines: usize,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        let rails = generate_lines(side, layout, rng)?;
        let targets = generate_targets(&rails, side, num_target_lines, rng)?;
        let lattice = Self::build(side, rails, targets);

        for target in &lattice.targets {
            assert!(
                lattice.on_rail(target),
                "generated target {:?} does not lie on a rail",
                target
            );
        }

        Ok(lattice)
    }

    /// Build a lattice from explicit rails and targets.
    ///
    /// # Errors
    ///
    /// Fails on a side length rejected by [`check_side_length`], an
    /// out-of-range coordinate, an empty target list, or a target that does
    /// not lie on one of the given rails.
    pub fn from_parts(side: usize, rails: Vec<Rail>, targets: Vec<Site>) -> Result<Self, SimError> {
        check_side_length(side)?;
        if targets.is_empty() {
            return Err(SimError::InvalidConfig("lattice needs at least one target".into()));
        }
        if let Some(rail) = rails.iter().find(|r| r.y >= side || r.z >= side) {
            return Err(SimError::InvalidConfig(format!(
                "rail {:?} lies outside a lattice of side {}",
                rail, side
            )));
        }
        if let Some(site) = targets
            .iter()
            .find(|s| s.x >= side || s.y >= side || s.z >= side)
        {
            return Err(SimError::InvalidConfig(format!(
                "target {:?} lies outside a lattice of side {}",
                site, side
            )));
        }

        let lattice = Self::build(side, rails, targets);
        if let Some(site) = lattice.targets.iter().find(|s| !lattice.on_rail(s)) {
            return Err(SimError::InvalidConfig(format!(
                "target {:?} does not lie on a rail",
                site
            )));
        }
        Ok(lattice)
    }

    fn build(side: usize, rails: Vec<Rail>, targets: Vec<Site>) -> Self {
        let mut rail_mask = BitSet::new(side * side);
        for rail in &rails {
            rail_mask.insert(rail.y * side + rail.z);
        }

        let mut sorted_targets = targets.clone();
        sorted_targets.sort_unstable();

        Self {
            side,
            rails,
            targets,
            sorted_targets,
            rail_mask,
        }
    }

    #[inline]
    fn cell(&self, rail: Rail) -> usize {
        rail.y * self.side + rail.z
    }

    /// Side length `L`.
    pub fn side_length(&self) -> usize {
        self.side
    }

    /// Rails in generation order.
    pub fn rails(&self) -> &[Rail] {
        &self.rails
    }

    /// Targets in generation order.
    pub fn targets(&self) -> &[Site] {
        &self.targets
    }

    /// Whether every coordinate of `site` lies in `[0, L)`.
    #[inline]
    pub fn contains(&self, site: &Site) -> bool {
        site.x < self.side && site.y < self.side && site.z < self.side
    }

    /// Whether `site` shares its `(y, z)` pair with some rail.
    #[inline]
    pub fn on_rail(&self, site: &Site) -> bool {
        self.rail_mask.contains(self.cell(site.cross_section()))
    }

    /// Whether `site` is exactly one of the targets.
    #[inline]
    pub fn on_target(&self, site: &Site) -> bool {
        self.on_rail(site) && self.sorted_targets.binary_search(site).is_ok()
    }

    /// Apply a unit move with periodic wraparound.
    ///
    /// # Panics
    ///
    /// Panics if `site` or the resulting site lies outside the lattice.
    #[inline]
    pub fn step(&self, site: Site, direction: Direction) -> Site {
        assert!(self.contains(&site), "site {:?} outside lattice", site);
        let side = self.side as i64;
        let (dx, dy, dz) = direction.delta();
        let next = Site {
            x: modulus(site.x as i64 + dx, side) as usize,
            y: modulus(site.y as i64 + dy, side) as usize,
            z: modulus(site.z as i64 + dz, side) as usize,
        };
        assert!(self.contains(&next), "step produced out-of-range site {:?}", next);
        next
    }

    /// A uniformly random site.
    pub fn random_site<R: Rng + ?Sized>(&self, rng: &mut R) -> Site {
        Site {
            x: rng.random_range(0..self.side),
            y: rng.random_range(0..self.side),
            z: rng.random_range(0..self.side),
        }
    }
}
