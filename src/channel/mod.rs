//! Tapped delay line fading channel.
//!
//! Composes the primitives into a time-varying multipath channel:
//!
//! ```text
//!                ┌──────────── delay line ────────────┐
//! x[n] ──push──▶ │ x[n]   x[n-1]   ...   x[n-d_k]  ...│
//!                └───┬──────────────────────┬─────────┘
//!                    × g_0·h_0(t)           × g_k·h_k(t)
//!                    └──────────(+)─────────┘
//!                                │
//!                               (+) ◀── AWGN
//!                                │
//!                              y[n]
//! ```
//!
//! `h_k(t)` is realization `k` of a [`FadingGenerator`], so every tap fades
//! independently with unit average power and `g_k` sets its mean level.

mod config;

pub use config::{ChannelConfig, TapConfig};

use num_complex::Complex64;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::dsp::delay::DelayLine;
use crate::dsp::fading::FadingGenerator;
use crate::dsp::noise::NoiseSource;
use crate::error::Result;
use crate::random;
use crate::units;

#[derive(Debug)]
pub struct FadingChannel {
    config: ChannelConfig,
    fading: FadingGenerator,
    history: DelayLine<Complex64>,
    /// Linear amplitude per tap
    gains: Vec<f64>,
    noise: Option<NoiseSource<f64>>,
    rng: ChaCha8Rng,
    time: f64,
    dt: f64,
}

impl FadingChannel {
    pub fn new(config: ChannelConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = random::seeded(config.seed.unwrap_or_else(rand::random));
        let fading = FadingGenerator::with_source(
            config.doppler_hz,
            config.fading,
            config.processes,
            &mut rng,
        );

        let gains = config
            .taps
            .iter()
            .map(|tap| units::power_to_amplitude(units::db_to_linear(tap.power_db)))
            .collect::<Result<Vec<_>>>()?;

        let noise = config
            .snr_db
            .map(|snr_db| {
                units::noise_stdev_for_snr(config.signal_power, snr_db).and_then(NoiseSource::new)
            })
            .transpose()?;

        debug!(
            sample_rate = config.sample_rate,
            doppler_hz = config.doppler_hz,
            fading = %config.fading,
            taps = config.taps.len(),
            max_delay = config.max_delay(),
            snr_db = ?config.snr_db,
            "built fading channel"
        );

        Ok(Self {
            history: DelayLine::new(config.max_delay() + 1),
            dt: 1.0 / config.sample_rate,
            fading,
            gains,
            noise,
            rng,
            time: 0.0,
            config,
        })
    }

    /// Pass one sample through the channel and advance time by one sample period.
    pub fn process_sample(&mut self, x: Complex64) -> Complex64 {
        self.history.push(x);
        self.fading.evaluate(self.time);

        let mut y = Complex64::new(0.0, 0.0);
        for (k, (tap, gain)) in self.config.taps.iter().zip(&self.gains).enumerate() {
            y += self.fading.at(k) * self.history.at(tap.delay) * *gain;
        }

        if let Some(noise) = &self.noise {
            y += noise.sample_with(&mut self.rng);
        }

        self.time += self.dt;
        y
    }

    /// Run a block through the channel in place.
    pub fn process(&mut self, buffer: &mut [Complex64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    /// Clear the path history and rewind the channel clock.
    /// Fading processes keep their phases, so the same channel replays.
    pub fn reset(&mut self) {
        self.history.reset();
        self.time = 0.0;
    }

    /// Seconds of signal processed since construction or the last reset.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Tap gains from the most recent sample (before the per-tap level is applied).
    pub fn fading(&self) -> &FadingGenerator {
        &self.fading
    }
}
