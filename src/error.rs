//! Recoverable error types.
//!
//! Only conditions that can come from externally supplied data live here.
//! Programmer errors (bad buffer lengths, out-of-range indices) are handled by
//! [`crate::contract`] and panic instead.

use thiserror::Error;

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers as values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A logarithm (or similar) was asked for a value that must be strictly positive
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    /// A square root (or similar) was asked for a negative value
    #[error("{what} must not be negative, got {value}")]
    Negative { what: &'static str, value: f64 },

    /// NaN or infinity where a finite number is required
    #[error("{what} must be finite, got {value}")]
    NotFinite { what: &'static str, value: f64 },

    /// Text that does not name a known fading spectrum
    #[error("unknown fading type '{0}' (expected 'jakes' or 'flat')")]
    UnknownFadingType(String),

    /// Channel configuration that cannot be built
    #[error("invalid channel configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn check_finite(what: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::NotFinite { what, value })
        }
    }
}
