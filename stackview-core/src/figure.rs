//! Capturing rendered figures as RGB arrays.

use image::{RgbImage, RgbaImage};
use ndarray::Array3;

use crate::{Error, Result};

/// A drawing surface that can be rasterized to RGB bytes.
pub trait FigureCanvas {
    /// Render pending drawing commands.
    ///
    /// # Errors
    /// Implementations report rendering failures as [`Error::InvalidArgument`].
    fn draw(&mut self) -> Result<()>;

    /// Canvas size in pixels as `(width, height)`.
    fn width_height(&self) -> (usize, usize);

    /// Row-major RGB bytes, three per pixel.
    fn rgb_bytes(&self) -> Vec<u8>;

    /// Release the canvas. The default does nothing.
    fn close(&mut self) {}
}

/// Draw `canvas` and copy it into a `(height, width, 3)` array.
///
/// With `autoclose` the canvas is closed after the pixels are read.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when the byte buffer does not match the
/// reported size, and propagates drawing failures.
pub fn grab_figure<C: FigureCanvas + ?Sized>(canvas: &mut C, autoclose: bool) -> Result<Array3<u8>> {
    canvas.draw()?;
    let (width, height) = canvas.width_height();
    let rgb = canvas.rgb_bytes();
    if autoclose {
        canvas.close();
    }

    let expected = width * height * 3;
    if rgb.len() != expected {
        return Err(Error::invalid(format!(
            "canvas reported {width}x{height} but produced {} bytes, expected {expected}",
            rgb.len()
        )));
    }
    Array3::from_shape_vec((height, width, 3), rgb).map_err(|e| Error::invalid(e.to_string()))
}

impl FigureCanvas for RgbImage {
    fn draw(&mut self) -> Result<()> {
        Ok(())
    }

    fn width_height(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn rgb_bytes(&self) -> Vec<u8> {
        self.as_raw().clone()
    }
}

impl FigureCanvas for RgbaImage {
    fn draw(&mut self) -> Result<()> {
        Ok(())
    }

    fn width_height(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn rgb_bytes(&self) -> Vec<u8> {
        self.pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect()
    }
}
