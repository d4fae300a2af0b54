//! Fixed-size in-place discrete Fourier transform with configurable scaling.
//!
//! The kernel is a [`rustfft`] plan owned by the engine. Planning happens once
//! at construction; after that `forward`/`inverse` only touch the caller's
//! buffer and the engine's scratch space, so a hot loop never allocates.
//!
//! ```text
//! forward:  X[k] = s_f · Σ x[n]·e^(-j2πkn/N)
//! inverse:  x[n] = s_i · Σ X[k]·e^(+j2πkn/N)
//! ```
//!
//! With the default scales (`s_f = 1`, `s_i = 1/N`) `inverse ∘ forward` is the
//! identity. A unitary pair is `s_f = s_i = 1/√N`.

use std::fmt;
use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};
use tracing::debug;

use crate::contract;
use crate::sample::Real;

pub struct FourierTransform<T: Real = f64> {
    size: usize,
    forward_scale: T,
    inverse_scale: T,
    forward: Arc<dyn Fft<T>>,
    inverse: Arc<dyn Fft<T>>,
    /// Working storage shared by both directions
    scratch: Vec<Complex<T>>,
}

impl<T: Real> FourierTransform<T> {
    /// Engine with the default scaling (forward 1, inverse 1/N).
    ///
    /// # Panics
    /// If `size` is not a power of two.
    pub fn new(size: usize) -> Self {
        contract::power_of_two("fourier", size);
        let inverse_scale = T::one() / T::cast(size as f64);
        Self::with_scales(size, T::one(), inverse_scale)
    }

    /// Engine with explicit scale factors for each direction.
    ///
    /// # Panics
    /// If `size` is not a power of two.
    pub fn with_scales(size: usize, forward_scale: T, inverse_scale: T) -> Self {
        let mut planner = FftPlanner::new();
        Self::from_planner(&mut planner, size, forward_scale, inverse_scale)
    }

    /// Build from an existing planner so engines of equal size share twiddle tables.
    ///
    /// # Panics
    /// If `size` is not a power of two.
    pub fn from_planner(
        planner: &mut FftPlanner<T>,
        size: usize,
        forward_scale: T,
        inverse_scale: T,
    ) -> Self {
        contract::power_of_two("fourier", size);

        let forward = planner.plan_fft_forward(size);
        let inverse = planner.plan_fft_inverse(size);
        let scratch_len = forward
            .get_inplace_scratch_len()
            .max(inverse.get_inplace_scratch_len());

        debug!(
            size,
            forward_scale = ?forward_scale,
            inverse_scale = ?inverse_scale,
            "planned fourier transform"
        );

        Self {
            size,
            forward_scale,
            inverse_scale,
            forward,
            inverse,
            scratch: vec![Complex::new(T::zero(), T::zero()); scratch_len],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn forward_scale(&self) -> T {
        self.forward_scale
    }

    pub fn inverse_scale(&self) -> T {
        self.inverse_scale
    }

    pub fn set_scales(&mut self, forward_scale: T, inverse_scale: T) {
        self.forward_scale = forward_scale;
        self.inverse_scale = inverse_scale;
    }

    /// Forward transform in place, then multiply by the forward scale.
    ///
    /// # Panics
    /// If `buffer.len() != self.size()`.
    pub fn forward(&mut self, buffer: &mut [Complex<T>]) {
        contract::length_matches("fourier forward", self.size, buffer.len());
        self.forward
            .process_with_scratch(buffer, &mut self.scratch);
        scale_in_place(buffer, self.forward_scale);
    }

    /// Inverse transform in place, then multiply by the inverse scale.
    ///
    /// # Panics
    /// If `buffer.len() != self.size()`.
    pub fn inverse(&mut self, buffer: &mut [Complex<T>]) {
        contract::length_matches("fourier inverse", self.size, buffer.len());
        self.inverse
            .process_with_scratch(buffer, &mut self.scratch);
        scale_in_place(buffer, self.inverse_scale);
    }
}

#[inline]
fn scale_in_place<T: Real>(buffer: &mut [Complex<T>], scale: T) {
    if scale == T::one() {
        return;
    }
    for v in buffer.iter_mut() {
        *v = *v * scale;
    }
}

// Plans are immutable and shared; only scratch needs a fresh copy.
impl<T: Real> Clone for FourierTransform<T> {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            forward_scale: self.forward_scale,
            inverse_scale: self.inverse_scale,
            forward: Arc::clone(&self.forward),
            inverse: Arc::clone(&self.inverse),
            scratch: self.scratch.clone(),
        }
    }
}

impl<T: Real> fmt::Debug for FourierTransform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FourierTransform")
            .field("size", &self.size)
            .field("forward_scale", &self.forward_scale)
            .field("inverse_scale", &self.inverse_scale)
            .finish()
    }
}
