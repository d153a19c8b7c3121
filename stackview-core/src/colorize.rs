//! Lookup-table colorization of grayscale images.

use ndarray::{Array3, ArrayView2, ArrayViewD, Ix2};

use crate::color_table::ColorTable;
use crate::{Error, Result};

/// Colorized image of shape `(height, width, 4)`.
pub type ColorizedImage = Array3<u8>;

/// Colorize a grayscale image through a lookup table.
///
/// `output[[i, j, ..]]` equals `table[image[[i, j]]]` for every pixel. All
/// pixels are validated before the output is allocated, so a failure never
/// leaves a partial buffer behind.
///
/// # Errors
/// Returns [`Error::IndexOutOfRange`] for the first pixel (row-major) whose
/// value is not a valid table index.
pub fn colorize<T>(image: ArrayView2<'_, T>, table: &ColorTable) -> Result<ColorizedImage>
where
    T: Copy + Into<u64>,
{
    let len = table.len();
    if let Some(&bad) = image.iter().find(|&&v| !in_table(v.into(), len)) {
        return Err(Error::IndexOutOfRange {
            index: bad.into(),
            len,
        });
    }

    let (height, width) = image.dim();
    let mut out = Array3::<u8>::zeros((height, width, 4));
    for ((i, j), &v) in image.indexed_iter() {
        let rgba = table.entry(index_of(v.into()));
        for (c, &channel) in rgba.iter().enumerate() {
            out[[i, j, c]] = channel;
        }
    }
    Ok(out)
}

/// Colorize a dynamic-rank array, checking that it is two-dimensional.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `image` is not 2-D, otherwise the
/// errors of [`colorize`].
pub fn colorize_dyn<T>(image: ArrayViewD<'_, T>, table: &ColorTable) -> Result<ColorizedImage>
where
    T: Copy + Into<u64>,
{
    let ndim = image.ndim();
    let image = image
        .into_dimensionality::<Ix2>()
        .map_err(|_| Error::invalid(format!("image must be 2-D, got {ndim} dimensions")))?;
    colorize(image, table)
}

#[inline]
fn in_table(value: u64, len: usize) -> bool {
    usize::try_from(value).is_ok_and(|v| v < len)
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn index_of(value: u64) -> usize {
    value as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2, IxDyn};

    fn ramp_table(n: usize) -> ColorTable {
        let entries = (0..n)
            .map(|k| {
                let k = u8::try_from(k).unwrap();
                [k, 255 - k, k / 2, 255]
            })
            .collect();
        ColorTable::from_entries(entries).unwrap()
    }

    #[test]
    fn test_output_matches_table() {
        let table = ramp_table(256);
        let image = array![[0u8, 1, 2], [253, 254, 255]];
        let out = colorize(image.view(), &table).unwrap();

        assert_eq!(out.dim(), (2, 3, 4));
        for ((i, j), &v) in image.indexed_iter() {
            let expected = table.get(usize::from(v)).unwrap();
            assert_eq!(out[[i, j, 0]], expected[0]);
            assert_eq!(out[[i, j, 1]], expected[1]);
            assert_eq!(out[[i, j, 2]], expected[2]);
            assert_eq!(out[[i, j, 3]], expected[3]);
        }
    }

    #[test]
    fn test_wide_pixel_types() {
        let table = ramp_table(256);
        let image = array![[300u16, 0]];
        assert_eq!(
            colorize(image.view(), &table),
            Err(Error::IndexOutOfRange {
                index: 300,
                len: 256
            })
        );

        let image = array![[7u32]];
        let out = colorize(image.view(), &table).unwrap();
        assert_eq!(out[[0, 0, 0]], 7);
    }

    #[test]
    fn test_short_table_reports_first_offender() {
        let table = ramp_table(10);
        let image = array![[1u8, 9, 12], [10, 0, 0]];
        assert_eq!(
            colorize(image.view(), &table),
            Err(Error::IndexOutOfRange { index: 12, len: 10 })
        );
    }

    #[test]
    fn test_empty_image() {
        let table = ramp_table(4);
        let image = Array2::<u8>::zeros((0, 5));
        let out = colorize(image.view(), &table).unwrap();
        assert_eq!(out.dim(), (0, 5, 4));
    }

    #[test]
    fn test_dyn_requires_two_dimensions() {
        let table = ramp_table(4);
        let cube = ndarray::ArrayD::<u8>::zeros(IxDyn(&[2, 2, 2]));
        assert!(matches!(
            colorize_dyn(cube.view(), &table),
            Err(Error::InvalidArgument(_))
        ));

        let flat = ndarray::ArrayD::<u8>::from_elem(IxDyn(&[1, 2]), 3);
        let out = colorize_dyn(flat.view(), &table).unwrap();
        assert_eq!(out.dim(), (1, 2, 4));
        assert_eq!(out[[0, 1, 0]], 3);
    }

    #[test]
    fn test_non_contiguous_view() {
        let table = ramp_table(256);
        let image = array![[1u8, 2], [3, 4]];
        let transposed = image.t();
        let out = colorize(transposed, &table).unwrap();
        assert_eq!(out[[0, 1, 0]], 3);
        assert_eq!(out[[1, 0, 0]], 2);
    }
}
