//! Slider-driven browsing through image stacks.
//!
//! The host UI owns the slider and calls [`StackBrowser::on_index_change`]
//! whenever the index moves; each call renders the selected frame from
//! scratch and has no side effects.

use std::ops::RangeInclusive;

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use log::{debug, warn};
use ndarray::{Array3, ArrayD, Axis, Ix2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color_table::{ColorTable, DEFAULT_TABLE_SIZE};
use crate::colorize::colorize;
use crate::colormap::NamedScale;
use crate::preprocess::{self, ResizeFilter, Sample};
use crate::{Error, Result};

/// Options controlling how frames are rendered.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BrowseOptions {
    /// Axis the slider moves along.
    pub axis: usize,
    /// Scale factor applied to the rendered frame.
    pub resize: Option<f64>,
    /// Stretch each frame's min/max onto the full display range.
    pub enhance_contrast: bool,
    /// Smooth when resizing instead of nearest-neighbour.
    pub antialiasing: bool,
    /// Lower clip bound applied before contrast enhancement.
    pub cutoff_min: Option<f64>,
    /// Upper clip bound applied before contrast enhancement.
    pub cutoff_max: Option<f64>,
    /// Colormap for grayscale frames; `None` shows them as gray.
    pub colormap: Option<NamedScale>,
    /// Number of entries in the colormap lookup table.
    pub table_size: usize,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            axis: 0,
            resize: None,
            enhance_contrast: true,
            antialiasing: false,
            cutoff_min: None,
            cutoff_max: None,
            colormap: None,
            table_size: DEFAULT_TABLE_SIZE,
        }
    }
}

impl BrowseOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the browsing axis.
    #[must_use]
    pub fn with_axis(mut self, axis: usize) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the resize factor.
    #[must_use]
    pub fn with_resize(mut self, factor: f64) -> Self {
        self.resize = Some(factor);
        self
    }

    /// Enables or disables contrast enhancement.
    #[must_use]
    pub fn with_enhance_contrast(mut self, enabled: bool) -> Self {
        self.enhance_contrast = enabled;
        self
    }

    /// Enables or disables antialiased resizing.
    #[must_use]
    pub fn with_antialiasing(mut self, enabled: bool) -> Self {
        self.antialiasing = enabled;
        self
    }

    /// Sets the clip range; either bound may be open.
    #[must_use]
    pub fn with_cutoff(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.cutoff_min = min;
        self.cutoff_max = max;
        self
    }

    /// Sets the colormap for grayscale frames.
    #[must_use]
    pub fn with_colormap(mut self, colormap: impl Into<NamedScale>) -> Self {
        self.colormap = Some(colormap.into());
        self
    }

    /// Sets the lookup table size.
    #[must_use]
    pub fn with_table_size(mut self, size: usize) -> Self {
        self.table_size = size;
        self
    }

    fn resize_filter(&self) -> ResizeFilter {
        if self.antialiasing {
            ResizeFilter::Antialias
        } else {
            ResizeFilter::Nearest
        }
    }
}

/// Browses a stack of grayscale, RGB or RGBA images along one axis.
#[derive(Debug, Clone)]
pub struct StackBrowser<T: Sample> {
    stack: ArrayD<T>,
    options: BrowseOptions,
    table: Option<ColorTable>,
    /// The input was a single image wrapped as a one-frame stack.
    single_image: bool,
}

impl<T: Sample> StackBrowser<T> {
    /// Create a browser over `stack`.
    ///
    /// A single image (2-D, or 3-D with three trailing channels) browsed
    /// along axis 0 becomes a one-frame stack.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when the stack has fewer than two
    /// axes, the axis is out of bounds or empty, a single image is browsed
    /// along a deeper axis, or the colormap table size is zero.
    pub fn new(stack: ArrayD<T>, options: BrowseOptions) -> Result<Self> {
        let shape = stack.shape().to_vec();
        if shape.len() < 2 {
            return Err(Error::invalid(format!(
                "image must be at least 2-D, got shape {shape:?}"
            )));
        }

        let single_image = is_single_image(&shape);
        let stack = if single_image {
            check_single_image_axis(&shape, options.axis)?;
            stack.insert_axis(Axis(0))
        } else {
            stack
        };

        if options.axis >= stack.ndim() {
            return Err(Error::invalid(format!(
                "axis {} out of bounds for {} dimensions",
                options.axis,
                stack.ndim()
            )));
        }
        if stack.len_of(Axis(options.axis)) == 0 {
            return Err(Error::invalid("stack has no frames along the browse axis"));
        }

        let table = build_table(&options)?;
        debug!(
            "browsing stack of shape {:?} along axis {}",
            stack.shape(),
            options.axis
        );
        if T::IS_FLOAT {
            warn!("float data will be converted to uint8 for display purposes");
        }
        Ok(Self {
            stack,
            options,
            table,
            single_image,
        })
    }

    /// Number of frames along the browse axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len_of(Axis(self.options.axis))
    }

    /// Always false; construction rejects empty stacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inclusive index range for the host slider.
    #[must_use]
    pub fn slider_range(&self) -> RangeInclusive<usize> {
        0..=self.len() - 1
    }

    /// Shape of the stack, including the pseudo-stack axis for single images.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.stack.shape()
    }

    /// Current rendering options.
    #[must_use]
    pub fn options(&self) -> &BrowseOptions {
        &self.options
    }

    /// Lookup table built from the colormap, if any.
    #[must_use]
    pub fn table(&self) -> Option<&ColorTable> {
        self.table.as_ref()
    }

    /// Replace the rendering options, rebuilding the lookup table.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when the new axis is out of bounds or
    /// empty, a single image is asked to go deeper than axis 0, or the table
    /// size is zero. The old options stay in effect.
    pub fn set_options(&mut self, options: BrowseOptions) -> Result<()> {
        if self.single_image {
            check_single_image_axis(&self.stack.shape()[1..], options.axis)?;
        }
        if options.axis >= self.stack.ndim() || self.stack.len_of(Axis(options.axis)) == 0 {
            return Err(Error::invalid(format!(
                "axis {} is not browsable for shape {:?}",
                options.axis,
                self.stack.shape()
            )));
        }
        self.table = build_table(&options)?;
        self.options = options;
        Ok(())
    }

    /// Render the frame at `index`.
    ///
    /// The frame is clipped, contrast-stretched, converted to 8 bits,
    /// colorized when a colormap is set and resized, as configured.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] for an index past the last frame or
    /// for pixel values the display range or lookup table cannot hold, and
    /// [`Error::InvalidArgument`] for frames that are not gray, RGB or RGBA.
    pub fn on_index_change(&self, index: usize) -> Result<DynamicImage> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange {
                index: index as u64,
                len,
            });
        }

        let mut frame = self
            .stack
            .index_axis(Axis(self.options.axis), index)
            .mapv(Sample::to_f64);
        preprocess::clip(&mut frame, self.options.cutoff_min, self.options.cutoff_max);
        if self.options.enhance_contrast {
            preprocess::enhance_contrast(&mut frame);
        }
        let display = preprocess::to_display_u8(&frame, T::IS_FLOAT)?;
        let image = self.to_image(display)?;

        debug!(
            "rendered frame {index} as {}x{}",
            image.width(),
            image.height()
        );
        match self.options.resize {
            Some(factor) => preprocess::resize(&image, factor, self.options.resize_filter()),
            None => Ok(image),
        }
    }

    /// Render the frame at `index` as a `(height, width, channels)` array.
    ///
    /// # Errors
    /// Same as [`StackBrowser::on_index_change`].
    pub fn frame_at(&self, index: usize) -> Result<Array3<u8>> {
        let image = self.on_index_change(index)?;
        let shape = (
            image.height() as usize,
            image.width() as usize,
            usize::from(image.color().channel_count()),
        );
        Array3::from_shape_vec(shape, image.as_bytes().to_vec())
            .map_err(|e| Error::invalid(format!("rendered frame has unexpected layout: {e}")))
    }

    fn to_image(&self, display: ArrayD<u8>) -> Result<DynamicImage> {
        let shape = display.shape().to_vec();
        match shape.as_slice() {
            [h, w] => {
                let gray = display
                    .into_dimensionality::<Ix2>()
                    .map_err(|e| Error::invalid(e.to_string()))?;
                if let Some(table) = &self.table {
                    let rgba = colorize(gray.view(), table)?;
                    let raw = rgba.iter().copied().collect();
                    RgbaImage::from_raw(dim(*w)?, dim(*h)?, raw)
                        .map(DynamicImage::ImageRgba8)
                        .ok_or_else(|| Error::invalid("colorized buffer size mismatch"))
                } else {
                    let raw = gray.iter().copied().collect();
                    GrayImage::from_raw(dim(*w)?, dim(*h)?, raw)
                        .map(DynamicImage::ImageLuma8)
                        .ok_or_else(|| Error::invalid("gray buffer size mismatch"))
                }
            }
            [h, w, 3] => {
                let raw = display.iter().copied().collect();
                RgbImage::from_raw(dim(*w)?, dim(*h)?, raw)
                    .map(DynamicImage::ImageRgb8)
                    .ok_or_else(|| Error::invalid("rgb buffer size mismatch"))
            }
            [h, w, 4] => {
                let raw = display.iter().copied().collect();
                RgbaImage::from_raw(dim(*w)?, dim(*h)?, raw)
                    .map(DynamicImage::ImageRgba8)
                    .ok_or_else(|| Error::invalid("rgba buffer size mismatch"))
            }
            _ => Err(Error::invalid(format!(
                "frame of shape {shape:?} is neither grayscale, RGB nor RGBA"
            ))),
        }
    }
}

fn is_single_image(shape: &[usize]) -> bool {
    shape.len() == 2 || (shape.len() == 3 && shape[2] == 3)
}

fn check_single_image_axis(shape: &[usize], axis: usize) -> Result<()> {
    if axis > 0 {
        return Err(Error::invalid(format!(
            "the array of shape {shape:?} cannot be browsed deeper"
        )));
    }
    Ok(())
}

fn build_table(options: &BrowseOptions) -> Result<Option<ColorTable>> {
    options
        .colormap
        .map(|scale| ColorTable::from_scale(&scale, options.table_size))
        .transpose()
}

fn dim(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::invalid(format!("dimension {value} too large")))
}
