pub mod channel; // Tapped delay line fading channel
pub mod contract;
pub mod dsp;
pub mod error;
pub mod random;
pub mod sample;
pub mod spectrum;
pub mod units;

pub use error::{Error, Result};

/// Fewest sinusoid processes a fading generator will run.
pub const MIN_FADING_PROCESSES: usize = 16;
