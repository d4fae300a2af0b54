//! Signal-processing primitives for channel simulation.
//!
//! Everything here is synchronous and does no I/O. Transforms work in place on
//! caller-owned buffers; once built, no component allocates while processing.
//! None of them lock internally, so sharing one instance across threads needs
//! external synchronization.

/// Bounded-history delay line.
pub mod delay;
/// Sum-of-sinusoids Rayleigh fading generator.
pub mod fading;
/// Fixed-size in-place Fourier transform engine.
pub mod fourier;
/// Fast Walsh–Hadamard transform.
pub mod hadamard;
/// Complex Gaussian noise source.
pub mod noise;

pub use delay::DelayLine;
pub use fading::{FadingGenerator, FadingType};
pub use fourier::FourierTransform;
pub use noise::NoiseSource;
