//! Numeric conversion helpers centralizing lossy casts.

use num_traits::cast::cast;

/// Convert a counter to f64, accepting precision loss above 2^53 in one place.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(f64::MAX)
}

/// Clamp a percentage into `[0, 100]`, mapping NaN to 0.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Round a percentage for display as a whole number.
#[must_use]
pub fn percent_to_u8(value: f64) -> u8 {
    cast::<f64, u8>(clamp_percent(value).round()).unwrap_or(0)
}
