//! Sum-of-sinusoids Rayleigh fading, mixed through a Hadamard transform.

/*
Multipath Fading via Sum of Sinusoids
=====================================

A mobile receiver sees many scattered copies of the transmitted signal, each
Doppler shifted by the angle it arrives from. Summing enough of them gives a
complex gain whose envelope is Rayleigh distributed and whose spectrum follows
the Doppler profile the frequencies were drawn from.

Vocabulary
----------

  Fdop          Maximum Doppler shift in Hz (v / λ). Sets how fast the
                channel decorrelates: coherence time ≈ 0.423 / Fdop.

  process       One oscillator: a complex amplitude, a random start phase
                and an angular Doppler frequency.

  realization   One independent fading waveform h_i(t). The generator
                produces N' of them per evaluation.

Doppler Profiles
----------------

JAKES   ω_i = 2π·Fdop·cos(π/2 · (i + ½)/N')
        Angles of arrival spread uniformly around the receiver. Frequencies
        bunch up near ±Fdop, giving the classic U-shaped spectrum.

FLAT    ω_i = 2π·Fdop·(i + ½)/N'
        Frequencies spaced evenly from 0 to Fdop.

Each ω_i is multiplied by a jitter drawn from [1 - 1e-5, 1 + 1e-5] so that no
two processes share a rational frequency ratio and the sum never repeats.

The Hadamard Trick
------------------

Building N' realizations directly means N' weighted sums of N' sinusoids:

    h_i(t) = (1/N') Σ_j H[i][j] · A_j · sin(ω_j·t + φ_j)        O(N'²)

The inner term does not depend on i. Compute it once per process,

    v_j(t) = A_j · sin(ω_j·t + φ_j)                              O(N')

and the outer sum is exactly a (normalized) Hadamard transform of v:

    h(t) = normalized(v(t))                                       O(N' log N')

Rows of H are orthogonal, so the realizations are mutually uncorrelated.
With |A_j|² = 2N' each realization has unit average power:

    E|h_i|² = (1/N'²) · Σ_j |A_j|² · ½ = (1/N'²) · N' · 2N' · ½ = 1

and the instantaneous envelope is bounded by (1/N')·N'·√(2N') = √(2N').
*/

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contract;
use crate::dsp::hadamard;
use crate::error::Error;
use crate::random::UniformSource;
use crate::MIN_FADING_PROCESSES;

const FREQUENCY_JITTER: f64 = 1e-5;

/// Processes a generator actually runs for a `requested` count: the next
/// power of two at or above it, never fewer than [`MIN_FADING_PROCESSES`].
pub fn process_count(requested: usize) -> usize {
    requested.max(MIN_FADING_PROCESSES).next_power_of_two()
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadingType {
    /// Classical U-shaped Doppler spectrum
    #[default]
    Jakes,
    /// Uniform Doppler spectrum
    Flat,
}

impl FadingType {
    /// Nominal (un-jittered) angular frequency of process `i` out of `n`.
    fn angular_frequency(self, doppler_hz: f64, i: usize, n: usize) -> f64 {
        let position = (i as f64 + 0.5) / n as f64;
        match self {
            FadingType::Jakes => TAU * doppler_hz * (0.5 * PI * position).cos(),
            FadingType::Flat => TAU * doppler_hz * position,
        }
    }
}

impl fmt::Display for FadingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FadingType::Jakes => write!(f, "jakes"),
            FadingType::Flat => write!(f, "flat"),
        }
    }
}

impl FromStr for FadingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jakes" => Ok(FadingType::Jakes),
            "flat" => Ok(FadingType::Flat),
            _ => Err(Error::UnknownFadingType(s.to_string())),
        }
    }
}

/// One Doppler-shifted oscillator. Fixed once the generator is built.
#[derive(Debug, Clone, Copy)]
struct Process {
    amplitude: Complex64,
    phase: f64,
    omega: f64,
}

/// Produces N' uncorrelated unit-power Rayleigh fading realizations per call.
///
/// ```
/// use chansim_dsp::dsp::fading::{FadingGenerator, FadingType};
/// use chansim_dsp::random::seeded;
///
/// let mut rng = seeded(1);
/// let mut fading = FadingGenerator::with_source(10.0, FadingType::Jakes, 1, &mut rng);
/// assert_eq!(fading.size(), 16);
///
/// fading.evaluate(0.25);
/// let h0 = fading.at(0);
/// assert!(h0.norm().is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct FadingGenerator {
    doppler_hz: f64,
    fading_type: FadingType,
    processes: Vec<Process>,
    samples: Vec<Complex64>,
}

impl FadingGenerator {
    /// Generator drawing its phases and jitter from the thread-local RNG.
    pub fn new(doppler_hz: f64, fading_type: FadingType, requested: usize) -> Self {
        Self::with_source(doppler_hz, fading_type, requested, &mut rand::thread_rng())
    }

    /// Generator drawing its phases and jitter from `source`, running
    /// [`process_count`]`(requested)` processes.
    pub fn with_source<U: UniformSource + ?Sized>(
        doppler_hz: f64,
        fading_type: FadingType,
        requested: usize,
        source: &mut U,
    ) -> Self {
        let n = process_count(requested);
        let gain = (2.0 * n as f64).sqrt();

        let processes = (0..n)
            .map(|i| {
                let amplitude = Complex64::from_polar(gain, PI * (i + 1) as f64 / n as f64);
                let phase = source.uniform(0.0, TAU);
                let jitter = source.uniform(1.0 - FREQUENCY_JITTER, 1.0 + FREQUENCY_JITTER);
                let omega = fading_type.angular_frequency(doppler_hz, i, n) * jitter;
                Process {
                    amplitude,
                    phase,
                    omega,
                }
            })
            .collect();

        debug!(
            doppler_hz,
            fading = %fading_type,
            requested,
            processes = n,
            "built fading generator"
        );

        Self {
            doppler_hz,
            fading_type,
            processes,
            samples: vec![Complex64::new(0.0, 0.0); n],
        }
    }

    /// Recompute all realizations at time `t` (seconds).
    pub fn evaluate(&mut self, t: f64) {
        for (sample, p) in self.samples.iter_mut().zip(&self.processes) {
            *sample = p.amplitude * (p.omega * t + p.phase).sin();
        }
        hadamard::normalized(&mut self.samples);
    }

    /// Realization `i` from the latest [`Self::evaluate`] (zero before the first one).
    ///
    /// # Panics
    /// If `i >= self.size()`.
    #[inline]
    pub fn at(&self, i: usize) -> Complex64 {
        contract::index_in_range("fading generator", i, self.samples.len());
        self.samples[i]
    }

    pub fn size(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Complex64] {
        &self.samples
    }

    pub fn doppler_hz(&self) -> f64 {
        self.doppler_hz
    }

    pub fn fading_type(&self) -> FadingType {
        self.fading_type
    }
}

impl Index<usize> for FadingGenerator {
    type Output = Complex64;

    fn index(&self, i: usize) -> &Complex64 {
        contract::index_in_range("fading generator", i, self.samples.len());
        &self.samples[i]
    }
}
