//! Random source used by every stochastic decision in the generator.

use rand::Rng;

/// Thin wrapper over a caller-owned [`Rng`] with the sampling shapes the
/// generator needs. Every call is one sampling event, so a seeded source
/// yields the same dungeon on every run.
pub struct Dice<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Dice<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// Callers guarantee `min <= max`; config validation rules out the
    /// layouts where that could fail.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "empty range {min}..={max}");
        self.rng.gen_range(min..=max)
    }

    /// Fair coin
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// True with probability `p` (clamped to `[0, 1]`)
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}
