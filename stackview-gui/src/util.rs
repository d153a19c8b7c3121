//! Numeric conversion utilities for stackview-gui.

/// Convert usize to f32 with allowed precision loss.
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f32(value: usize) -> f32 {
    value as f32
}

/// Convert usize to f64 with allowed precision loss.
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Convert f64 to usize with bounds checking.
///
/// Returns `None` if the value is not finite, negative, or >= `max_exclusive`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn f64_to_usize_bounded(value: f64, max_exclusive: usize) -> Option<usize> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    if value >= usize_to_f64(max_exclusive) {
        return None;
    }
    Some(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_conversion() {
        assert_eq!(f64_to_usize_bounded(3.7, 10), Some(3));
        assert_eq!(f64_to_usize_bounded(-0.1, 10), None);
        assert_eq!(f64_to_usize_bounded(10.0, 10), None);
        assert_eq!(f64_to_usize_bounded(f64::NAN, 10), None);
    }
}
