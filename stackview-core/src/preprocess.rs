//! Preprocessing stages applied to a frame before display.
//!
//! None of these run inside [`crate::colorize()`]; callers chain them
//! explicitly, and [`crate::StackBrowser`] does so according to its
//! [`crate::BrowseOptions`].

use image::imageops::FilterType;
use image::DynamicImage;
use log::debug;
use ndarray::{Array, Dimension};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::util::{f64_to_dimension, f64_to_u8_saturating};
use crate::{Error, Result};

/// Number of 8-bit display levels.
pub const DISPLAY_LEVELS: usize = 256;

/// Element types a stack may hold.
pub trait Sample: Copy + 'static {
    /// Floating-point samples are truncated to 8 bits for display.
    const IS_FLOAT: bool;

    /// Widen to f64 for preprocessing.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($ty:ty => $is_float:expr),* $(,)?) => {
        $(
            impl Sample for $ty {
                const IS_FLOAT: bool = $is_float;

                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )*
    };
}

impl_sample!(u8 => false, u16 => false, u32 => false, f32 => true, f64 => true);

/// Clamp every value to the optional bounds.
pub fn clip<D: Dimension>(frame: &mut Array<f64, D>, min: Option<f64>, max: Option<f64>) {
    if min.is_none() && max.is_none() {
        return;
    }
    let lo = min.unwrap_or(f64::NEG_INFINITY);
    let hi = max.unwrap_or(f64::INFINITY);
    frame.mapv_inplace(|v| v.max(lo).min(hi));
}

/// Min/max contrast stretch onto [0, 255].
///
/// The minimum maps to 0 and the maximum to 255. A constant frame becomes
/// all zeros.
pub fn enhance_contrast<D: Dimension>(frame: &mut Array<f64, D>) {
    let Some((min, max)) = min_max(frame) else {
        return;
    };
    let range = max - min;
    if range > 0.0 && range.is_finite() {
        let scale = 255.0 / range;
        frame.mapv_inplace(|v| (v - min) * scale);
    } else {
        frame.fill(0.0);
    }
}

/// Smallest and largest finite value, `None` for empty frames.
#[must_use]
pub fn min_max<D: Dimension>(frame: &Array<f64, D>) -> Option<(f64, f64)> {
    frame
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Convert preprocessed values to 8-bit display values.
///
/// Float data is truncated with saturation. Integer data must already lie
/// within the display range.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] for integer data outside [0, 255].
pub fn to_display_u8<D: Dimension>(frame: &Array<f64, D>, is_float: bool) -> Result<Array<u8, D>> {
    if is_float {
        debug!("truncating float frame to uint8");
        return Ok(frame.mapv(f64_to_u8_saturating));
    }
    if let Some(&bad) = frame.iter().find(|v| !(0.0..256.0).contains(*v)) {
        return Err(Error::IndexOutOfRange {
            index: negative_as_zero(bad),
            len: DISPLAY_LEVELS,
        });
    }
    Ok(frame.mapv(f64_to_u8_saturating))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn negative_as_zero(value: f64) -> u64 {
    value.max(0.0) as u64
}

/// Resampling filter used when resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResizeFilter {
    /// Nearest-neighbour; keeps individual pixels crisp.
    #[default]
    Nearest,
    /// Lanczos3 smoothing.
    Antialias,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Antialias => FilterType::Lanczos3,
        }
    }
}

/// Scale both image dimensions by `factor`.
///
/// Target dimensions are truncated and never smaller than one pixel.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `factor` is not a positive,
/// finite number.
pub fn resize(image: &DynamicImage, factor: f64, filter: ResizeFilter) -> Result<DynamicImage> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(Error::invalid(format!(
            "resize factor must be positive, got {factor}"
        )));
    }
    let width = f64_to_dimension(f64::from(image.width()) * factor);
    let height = f64_to_dimension(f64::from(image.height()) * factor);
    Ok(image.resize_exact(width, height, filter.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::{GenericImageView, GrayImage, Luma};
    use ndarray::array;

    #[test]
    fn test_clip_bounds() {
        let mut frame = array![[-5.0, 3.0], [10.0, 300.0]];
        clip(&mut frame, Some(0.0), Some(255.0));
        assert_eq!(frame, array![[0.0, 3.0], [10.0, 255.0]]);

        let mut frame = array![[-5.0, 300.0]];
        clip(&mut frame, None, Some(100.0));
        assert_eq!(frame, array![[-5.0, 100.0]]);

        // A zero bound still applies.
        let mut frame = array![[-1.0, 1.0]];
        clip(&mut frame, Some(0.0), None);
        assert_eq!(frame, array![[0.0, 1.0]]);
    }

    #[test]
    fn test_contrast_stretch() {
        let mut frame = array![[10.0, 20.0], [30.0, 60.0]];
        enhance_contrast(&mut frame);
        assert_relative_eq!(frame[[0, 0]], 0.0);
        assert_relative_eq!(frame[[0, 1]], 51.0);
        assert_relative_eq!(frame[[1, 1]], 255.0);
    }

    #[test]
    fn test_constant_frame_goes_black() {
        let mut frame = array![[7.0, 7.0]];
        enhance_contrast(&mut frame);
        assert_eq!(frame, array![[0.0, 0.0]]);
    }

    #[test]
    fn test_display_conversion() {
        let floats = array![[0.9, 254.7, 1000.0, -3.0]];
        assert_eq!(to_display_u8(&floats, true).unwrap(), array![[0u8, 254, 255, 0]]);

        let ints = array![[0.0, 255.0]];
        assert_eq!(to_display_u8(&ints, false).unwrap(), array![[0u8, 255]]);

        let wide = array![[4.0, 4095.0]];
        assert_eq!(
            to_display_u8(&wide, false),
            Err(Error::IndexOutOfRange {
                index: 4095,
                len: 256
            })
        );
    }

    #[test]
    fn test_resize_nearest_doubles() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_fn(2, 3, |x, y| {
            Luma([u8::try_from(x + 10 * y).unwrap()])
        }));
        let out = resize(&img, 2.0, ResizeFilter::Nearest).unwrap();
        assert_eq!(out.dimensions(), (4, 6));

        let half = resize(&img, 0.1, ResizeFilter::Antialias).unwrap();
        assert_eq!(half.dimensions(), (1, 1));
    }

    #[test]
    fn test_resize_rejects_bad_factor() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(2, 2));
        assert!(resize(&img, 0.0, ResizeFilter::Nearest).is_err());
        assert!(resize(&img, f64::NAN, ResizeFilter::Nearest).is_err());
    }
}
