//! Injectable random source for dwell sampling.
//!
//! The trace engine never reaches for a process-wide RNG.  Callers hand it a
//! `TraceRng`, seeded for reproducible output or from OS entropy for one-off
//! runs.  Identical seed + identical map + identical window always yields an
//! identical trace.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG owned by one trace run.
pub struct TraceRng(SmallRng);

impl TraceRng {
    pub fn new(seed: u64) -> Self {
        TraceRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.
    pub fn from_entropy() -> Self {
        TraceRng(SmallRng::from_entropy())
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
}
