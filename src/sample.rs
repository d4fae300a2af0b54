//! Element types the primitives are generic over.

use std::ops::{Add, Sub};

use num_complex::Complex;
use num_traits::Float;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use rustfft::FftNum;

/// A value that can be summed, differenced and scaled by a real factor.
///
/// This is all the Hadamard butterfly and block-level delay rendering need, so
/// the same code runs on real and complex streams.
pub trait Sample: Copy + Add<Output = Self> + Sub<Output = Self> {
    fn scale(self, factor: f64) -> Self;
}

/// Floating point scalar used for complex samples (`f32` or `f64`).
pub trait Real: FftNum + Float {
    /// Lossy conversion from a double-precision constant.
    fn cast(value: f64) -> Self;

    /// One draw from N(0, 1).
    fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_real {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn scale(self, factor: f64) -> Self {
                    self * factor as $t
                }
            }

            impl Sample for Complex<$t> {
                #[inline]
                fn scale(self, factor: f64) -> Self {
                    self * factor as $t
                }
            }

            impl Real for $t {
                #[inline]
                fn cast(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    StandardNormal.sample(rng)
                }
            }
        )*
    };
}

impl_real!(f32, f64);
