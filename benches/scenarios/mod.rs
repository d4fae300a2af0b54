//! Real-world scenario benchmarks.
//!
//! These run complete channel configurations as a link simulation would,
//! fading plus delay line plus noise per sample.

mod channel;

pub use channel::bench_channel;
