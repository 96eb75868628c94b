//! Sources of secret target numbers.
//!
//! Session creation draws its target from a [`TargetSource`] rather than a
//! global RNG, so tests can pin the number and servers can run seeded.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// Smallest number a target can be.
pub const TARGET_MIN: u32 = 1;
/// Largest number a target can be.
pub const TARGET_MAX: u32 = 100;

/// Inclusive range every target and every valid guess falls in.
pub const TARGET_RANGE: RangeInclusive<u32> = TARGET_MIN..=TARGET_MAX;

/// Produces secret numbers for new games.
///
/// Implementations must only return values inside [`TARGET_RANGE`].
pub trait TargetSource: Send {
    /// Draws the next target.
    fn next_target(&mut self) -> u32;
}

/// Uniformly random targets backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandomTargets<R = StdRng> {
    rng: R,
}

impl RandomTargets<StdRng> {
    /// Seeds from the operating system.
    #[instrument]
    pub fn from_os_rng() -> Self {
        debug!("Seeding target source from OS entropy");
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source, identical seeds yield identical targets.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "Seeding target source");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomTargets<R> {
    /// Wraps an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomTargets<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng + Send> TargetSource for RandomTargets<R> {
    fn next_target(&mut self) -> u32 {
        self.rng.random_range(TARGET_RANGE)
    }
}

/// Replays a fixed list of targets, repeating the last one once exhausted.
///
/// Values outside [`TARGET_RANGE`] are clamped into it.
#[derive(Debug, Clone)]
pub struct FixedTargets {
    queue: VecDeque<u32>,
    last: u32,
}

impl FixedTargets {
    /// Always yields `target`.
    pub fn always(target: u32) -> Self {
        Self::sequence([target])
    }

    /// Yields each value in order, then keeps yielding the final one.
    pub fn sequence(targets: impl IntoIterator<Item = u32>) -> Self {
        let queue: VecDeque<u32> = targets
            .into_iter()
            .map(|t| t.clamp(TARGET_MIN, TARGET_MAX))
            .collect();
        let last = queue.back().copied().unwrap_or(TARGET_MIN);
        Self { queue, last }
    }
}

impl TargetSource for FixedTargets {
    fn next_target(&mut self) -> u32 {
        match self.queue.pop_front() {
            Some(target) => {
                self.last = target;
                target
            }
            None => self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_agree() {
        let mut a = RandomTargets::seeded(7);
        let mut b = RandomTargets::seeded(7);
        let xs: Vec<u32> = (0..20).map(|_| a.next_target()).collect();
        let ys: Vec<u32> = (0..20).map(|_| b.next_target()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn fixed_sequence_repeats_last() {
        let mut source = FixedTargets::sequence([5, 0, 250]);
        assert_eq!(source.next_target(), 5);
        assert_eq!(source.next_target(), TARGET_MIN);
        assert_eq!(source.next_target(), TARGET_MAX);
        assert_eq!(source.next_target(), TARGET_MAX);
    }

    #[test]
    fn empty_sequence_yields_minimum() {
        let mut source = FixedTargets::sequence([]);
        assert_eq!(source.next_target(), TARGET_MIN);
    }
}
