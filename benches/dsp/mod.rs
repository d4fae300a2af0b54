//! Benchmarks for low-level DSP primitives.

mod delay;
mod fading;
mod fourier;
mod hadamard;
mod noise;

pub use delay::bench_delay;
pub use fading::bench_fading;
pub use fourier::bench_fourier;
pub use hadamard::bench_hadamard;
pub use noise::bench_noise;
