//! Sampling without replacement.
//!
//! Both helpers shuffle the full domain and keep a prefix. The order of the
//! returned values is an artifact of the shuffle; callers may only rely on
//! distinctness and range.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::SimError;

/// Draw `count` distinct integers uniformly from `0..domain_size`.
///
/// Every size-`count` subset is equally likely.
///
/// # Errors
///
/// Returns [`SimError::SampleTooLarge`] if `count > domain_size`.
pub fn sample_without_replacement<R: Rng + ?Sized>(
    domain_size: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>, SimError> {
    if count > domain_size {
        return Err(SimError::SampleTooLarge { domain_size, count });
    }

    let mut numbers: Vec<usize> = (0..domain_size).collect();
    numbers.shuffle(rng);
    numbers.truncate(count);
    Ok(numbers)
}

/// Draw `count` distinct `(y, z)` pairs from the `side * side` plane.
///
/// # Errors
///
/// Returns [`SimError::SampleTooLarge`] if `count > side * side`.
pub fn sample_distinct_pairs<R: Rng + ?Sized>(
    side: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<(usize, usize)>, SimError> {
    let cells = sample_without_replacement(side * side, count, rng)?;
    Ok(cells.into_iter().map(|c| (c / side, c % side)).collect())
}
