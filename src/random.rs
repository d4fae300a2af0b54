//! Uniform random numbers consumed by the fading generator.
//!
//! The generator only needs independent draws in `[lo, hi)`; where they come
//! from (thread-local entropy, a seeded stream shared by a whole simulation)
//! is the caller's business. Anything implementing [`rand::Rng`] qualifies.

use rand::distributions::{Distribution, Standard};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait UniformSource {
    /// Independent draw in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let u: f64 = Standard.sample(self);
        lo + (hi - lo) * u
    }
}

/// Reproducible generator for simulations that must replay exactly.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
