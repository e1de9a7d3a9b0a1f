//! Deterministic simulation-level RNG wrapper.
//!
//! The dispatcher owns one `HiveRng` and lends it to the waypoint sequencer
//! whenever an order is decomposed.  Because the simulation is strictly
//! single-threaded, one stream is enough: the same seed and the same sequence
//! of `add_item` / `add_order` / `tick` calls always reproduce the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded random stream used for annealing swaps and acceptance tests.
pub struct HiveRng(SmallRng);

impl HiveRng {
    pub fn new(seed: u64) -> Self {
        HiveRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream for collaborators (the demo
    /// load generator) so their draws never perturb the dispatcher's stream.
    pub fn child(&mut self, offset: u64) -> HiveRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        HiveRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
