//! Numeric conversion helpers.
//!
//! These functions handle conversions between numeric types with explicit
//! handling of precision loss and bounds checking.

/// Convert usize to f64 with allowed precision loss.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Convert a unit-range channel value to u8, clamping to [0, 1] and rounding.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn unit_to_u8(value: f64) -> u8 {
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    (clamped * 255.0).round() as u8
}

/// Truncate f64 to u8, saturating at both ends.
///
/// NaN maps to 0, like an `as` cast.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn f64_to_u8_saturating(value: f64) -> u8 {
    value as u8
}

/// Convert f64 to u32, truncating and clamping at 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn f64_to_dimension(value: f64) -> u32 {
    (value as u32).max(1)
}
