#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::fading::{self, FadingType};
use crate::error::{Error, Result};
use crate::MIN_FADING_PROCESSES;

/// One resolvable path of a tapped delay line channel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapConfig {
    /// Path delay in samples
    pub delay: usize,
    /// Average path power relative to a unit-gain path
    pub power_db: f64,
}

impl TapConfig {
    pub fn new(delay: usize, power_db: f64) -> Self {
        Self { delay, power_db }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelConfig {
    pub sample_rate: f64,
    pub doppler_hz: f64,
    pub fading: FadingType,
    /// Requested fading processes, rounded up to a power of two (minimum 16)
    pub processes: usize,
    pub taps: Vec<TapConfig>,
    /// Additive noise level; `None` disables noise
    pub snr_db: Option<f64>,
    /// Reference signal power the SNR is measured against
    pub signal_power: f64,
    /// Fixed seed for reproducible runs; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            doppler_hz: 10.0,
            fading: FadingType::Jakes,
            processes: MIN_FADING_PROCESSES,
            taps: vec![TapConfig::new(0, 0.0)],
            snr_db: None,
            signal_power: 1.0,
            seed: None,
        }
    }
}

impl ChannelConfig {
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_doppler(mut self, doppler_hz: f64, fading: FadingType) -> Self {
        self.doppler_hz = doppler_hz;
        self.fading = fading;
        self
    }

    pub fn with_processes(mut self, processes: usize) -> Self {
        self.processes = processes;
        self
    }

    pub fn with_taps(mut self, taps: Vec<TapConfig>) -> Self {
        self.taps = taps;
        self
    }

    pub fn with_snr_db(mut self, snr_db: f64) -> Self {
        self.snr_db = Some(snr_db);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of fading processes the generator will actually run.
    pub fn effective_processes(&self) -> usize {
        fading::process_count(self.processes)
    }

    pub fn max_delay(&self) -> usize {
        self.taps.iter().map(|t| t.delay).max().unwrap_or(0)
    }

    pub fn validate(&self) -> Result<()> {
        let sample_rate = Error::check_finite("sample_rate", self.sample_rate)?;
        if sample_rate <= 0.0 {
            return Err(Error::NonPositive {
                what: "sample_rate",
                value: sample_rate,
            });
        }
        Error::check_finite("doppler_hz", self.doppler_hz)?;

        if self.taps.is_empty() {
            return Err(Error::InvalidConfig("at least one tap is required".into()));
        }
        // every tap takes its own fading realization
        if self.taps.len() > self.effective_processes() {
            return Err(Error::InvalidConfig(format!(
                "{} taps but only {} fading processes",
                self.taps.len(),
                self.effective_processes()
            )));
        }
        for tap in &self.taps {
            Error::check_finite("tap power_db", tap.power_db)?;
        }

        if let Some(snr_db) = self.snr_db {
            Error::check_finite("snr_db", snr_db)?;
        }
        let signal_power = Error::check_finite("signal_power", self.signal_power)?;
        if signal_power < 0.0 {
            return Err(Error::Negative {
                what: "signal_power",
                value: signal_power,
            });
        }
        Ok(())
    }
}
