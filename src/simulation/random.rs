use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness for start offsets
///
/// Kept behind a trait so tests can script the exact draws.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..upper`; `upper` must be non-zero
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Adapts any `rand` generator to [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn next_index(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

/// Deterministic source for a fixed seed
#[must_use]
pub fn seeded(seed: u64) -> RngSource<ChaCha8Rng> {
    RngSource(ChaCha8Rng::seed_from_u64(seed))
}

/// Seed taken from the wall clock, used when no seed is configured
#[must_use]
pub fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp_millis().unsigned_abs()
}
