//! Power, amplitude and decibel conversions.
//!
//! These are the places where externally supplied numbers meet a logarithm or
//! a square root, so they validate and return [`crate::Error`] instead of
//! producing NaN.

use crate::error::{Error, Result};

/// `10·log10(x)`. `x` must be strictly positive and finite.
pub fn linear_to_db(x: f64) -> Result<f64> {
    let x = Error::check_finite("linear power", x)?;
    if x <= 0.0 {
        return Err(Error::NonPositive {
            what: "linear power",
            value: x,
        });
    }
    Ok(10.0 * x.log10())
}

#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 10.0)
}

/// RMS amplitude of a signal with the given mean power.
pub fn power_to_amplitude(power: f64) -> Result<f64> {
    let power = Error::check_finite("power", power)?;
    if power < 0.0 {
        return Err(Error::Negative {
            what: "power",
            value: power,
        });
    }
    Ok(power.sqrt())
}

/// Complex noise standard deviation that puts `signal_power` at `snr_db`
/// above the noise floor (σ² = P / 10^(snr/10)).
pub fn noise_stdev_for_snr(signal_power: f64, snr_db: f64) -> Result<f64> {
    let snr_db = Error::check_finite("snr_db", snr_db)?;
    power_to_amplitude(signal_power / db_to_linear(snr_db))
}
