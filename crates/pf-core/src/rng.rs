//! Deterministic, explicitly passed randomness.
//!
//! Nothing in the workspace touches a thread-local or global RNG.  Every
//! random draw goes through a `LotRng` that the caller seeds and owns, so a
//! given seed always produces the same parking layout.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG used to populate occupancy grids.
pub struct LotRng(SmallRng);

impl LotRng {
    pub fn new(seed: u64) -> Self {
        LotRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
