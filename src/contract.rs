//! Fail-fast preconditions shared by every component.
//!
//! These checks guard programmer errors, not bad data: a transform handed a
//! buffer of the wrong length or a delay line asked for a lag it cannot hold is
//! a bug at the call site. They panic (with the caller's location, thanks to
//! `#[track_caller]`) instead of returning a [`crate::Error`].
//!
//! | check                   | used by                                |
//! | ----------------------- | -------------------------------------- |
//! | [`power_of_two`]        | Hadamard, Fourier engine, spectrum     |
//! | [`length_matches`]      | Fourier engine, spectrum               |
//! | [`index_in_range`]      | delay line, fading generator           |
//! | [`non_zero`]            | delay line capacity                    |
//!
//! All checks are O(1) and stay enabled in release builds.

/// Panics unless `len` is 2^k for some k >= 0.
#[inline]
#[track_caller]
pub fn power_of_two(what: &str, len: usize) {
    assert!(
        len.is_power_of_two(),
        "{what}: length {len} is not a power of two"
    );
}

/// Panics unless a buffer's length equals the size a component was built for.
#[inline]
#[track_caller]
pub fn length_matches(what: &str, expected: usize, actual: usize) {
    assert!(
        expected == actual,
        "{what}: buffer length {actual} does not match size {expected}"
    );
}

/// Panics unless `index < len`.
#[inline]
#[track_caller]
pub fn index_in_range(what: &str, index: usize, len: usize) {
    assert!(
        index < len,
        "{what}: index {index} out of range for length {len}"
    );
}

#[inline]
#[track_caller]
pub fn non_zero(what: &str, value: usize) {
    assert!(value > 0, "{what}: must be non-zero");
}
