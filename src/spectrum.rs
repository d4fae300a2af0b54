//! Windowed power spectrum estimate on top of [`FourierTransform`].
//!
//! Bins are normalized by the window energy, so a white noise input of power
//! σ² produces bins that average σ² regardless of window or size.

use num_complex::Complex64;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::contract;
use crate::dsp::fourier::FourierTransform;
use crate::units;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    Rectangular,
    /// Reduces spectral leakage at the cost of a wider main lobe
    #[default]
    Hann,
}

impl Window {
    pub fn coefficients(self, len: usize) -> Vec<f64> {
        match self {
            Window::Rectangular => vec![1.0; len],
            Window::Hann => (0..len)
                .map(|i| {
                    if len > 1 {
                        let denom = (len - 1) as f64;
                        0.5 * (1.0 - (std::f64::consts::TAU * i as f64 / denom).cos())
                    } else {
                        1.0
                    }
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PowerSpectrum {
    fft: FourierTransform<f64>,
    window: Vec<f64>,
    window_energy: f64,
    work: Vec<Complex64>,
    power: Vec<f64>,
}

impl PowerSpectrum {
    /// # Panics
    /// If `size` is not a power of two.
    pub fn new(size: usize, window: Window) -> Self {
        let fft = FourierTransform::new(size);
        let window = window.coefficients(size);
        let window_energy = window.iter().map(|w| w * w).sum();

        Self {
            fft,
            window,
            window_energy,
            work: vec![Complex64::new(0.0, 0.0); size],
            power: vec![0.0; size],
        }
    }

    pub fn size(&self) -> usize {
        self.fft.size()
    }

    /// Linear power per bin, in FFT order (DC first, negative frequencies in
    /// the upper half).
    ///
    /// # Panics
    /// If `input.len() != self.size()`.
    pub fn compute(&mut self, input: &[Complex64]) -> &[f64] {
        contract::length_matches("power spectrum", self.size(), input.len());

        for ((w, x), coeff) in self.work.iter_mut().zip(input).zip(&self.window) {
            *w = *x * *coeff;
        }
        self.fft.forward(&mut self.work);

        // a two-point Hann window is all zeros
        let norm = if self.window_energy > 0.0 {
            1.0 / self.window_energy
        } else {
            0.0
        };
        for (p, x) in self.power.iter_mut().zip(&self.work) {
            *p = x.norm_sqr() * norm;
        }
        &self.power
    }

    /// Like [`Self::compute`], in dB. Empty bins (which have no logarithm)
    /// and anything quieter than `floor_db` read as `floor_db`.
    pub fn compute_db(&mut self, input: &[Complex64], floor_db: f64) -> Vec<f64> {
        self.compute(input)
            .iter()
            .map(|&p| match units::linear_to_db(p) {
                Ok(db) => db.max(floor_db),
                Err(_) => floor_db,
            })
            .collect()
    }

    /// Strongest bin from the latest [`Self::compute`].
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.power
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Centre frequency of bin `k` in Hz, negative for the upper half.
    pub fn bin_frequency(&self, k: usize, sample_rate: f64) -> f64 {
        let n = self.size();
        contract::index_in_range("power spectrum bin", k, n);
        let signed = if k < n / 2 || n == 1 {
            k as f64
        } else {
            k as f64 - n as f64
        };
        signed * sample_rate / n as f64
    }
}
