//! Complex additive white Gaussian noise.

/*
Complex AWGN
============

Each sample is n = x + j·y with x, y independent and N(0, σ²/2). Then

    E[|n|²] = σ²        (total noise power)
    |n|     ~ Rayleigh  (envelope)
    arg(n)  ~ U(-π, π)  (phase)

so σ here is the RMS magnitude of the complex noise, not the per-rail
deviation. Use `units::noise_stdev_for_snr` to get σ from a target SNR.
*/

use num_complex::Complex;
use num_traits::Float;
use rand::Rng;

use crate::error::{Error, Result};
use crate::sample::Real;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseSource<T: Real = f64> {
    stdev: T,
    /// Per-rail deviation, σ/√2
    rail: T,
}

impl<T: Real> NoiseSource<T> {
    /// Noise with RMS magnitude `stdev`.
    ///
    /// Fails if `stdev` is negative, NaN or infinite.
    pub fn new(stdev: T) -> Result<Self> {
        let as_f64 = stdev.to_f64().unwrap_or(f64::NAN);
        if !Float::is_finite(stdev) {
            return Err(Error::NotFinite {
                what: "noise stdev",
                value: as_f64,
            });
        }
        if stdev < T::zero() {
            return Err(Error::Negative {
                what: "noise stdev",
                value: as_f64,
            });
        }
        Ok(Self {
            stdev,
            rail: stdev * T::cast(std::f64::consts::FRAC_1_SQRT_2),
        })
    }

    pub fn stdev(&self) -> T {
        self.stdev
    }

    /// One sample from the thread-local generator.
    pub fn sample(&self) -> Complex<T> {
        self.sample_with(&mut rand::thread_rng())
    }

    /// One sample from a caller-supplied generator (for reproducible runs).
    #[inline]
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex<T> {
        let re = T::standard_normal(rng);
        let im = T::standard_normal(rng);
        Complex::new(re * self.rail, im * self.rail)
    }

    /// Stateless one-off draw for an explicit `stdev`.
    pub fn get_sample(stdev: T) -> Result<Complex<T>> {
        Ok(Self::new(stdev)?.sample())
    }

    /// Overwrite `buffer` with fresh noise.
    pub fn fill<R: Rng + ?Sized>(&self, buffer: &mut [Complex<T>], rng: &mut R) {
        for v in buffer.iter_mut() {
            *v = self.sample_with(rng);
        }
    }

    /// Add fresh noise on top of `buffer`.
    pub fn add_to<R: Rng + ?Sized>(&self, buffer: &mut [Complex<T>], rng: &mut R) {
        for v in buffer.iter_mut() {
            *v = *v + self.sample_with(rng);
        }
    }
}
