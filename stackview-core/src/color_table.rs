//! Discrete RGBA lookup tables sampled from color scales.

use log::debug;

use crate::colormap::NamedScale;
use crate::scale::ColorScale;
use crate::util::{unit_to_u8, usize_to_f64};
use crate::{Error, Result};

/// RGBA color with 8-bit channels.
pub type Rgba = [u8; 4];

/// Table size used when none is given; one entry per 8-bit gray level.
pub const DEFAULT_TABLE_SIZE: usize = 256;

/// An ordered, non-empty sequence of RGBA entries indexed from 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<Rgba>,
}

impl ColorTable {
    /// Build a table of `n` entries by sampling `scale` at `k / (n - 1)`.
    ///
    /// Each channel is clamped to [0, 1], scaled by 255 and rounded. A
    /// single-entry table samples `t = 0`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when `n` is zero.
    pub fn from_scale<S: ColorScale + ?Sized>(scale: &S, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid("color table size must be positive"));
        }
        let denom = usize_to_f64(n.saturating_sub(1).max(1));
        let entries = (0..n)
            .map(|k| {
                let [r, g, b, a] = scale.sample(usize_to_f64(k) / denom);
                [unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(a)]
            })
            .collect::<Vec<_>>();
        debug!("built color table with {n} entries");
        Ok(Self { entries })
    }

    /// Build a table from a named colormap.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when `n` is zero.
    pub fn from_colormap(colormap: impl Into<NamedScale>, n: usize) -> Result<Self> {
        Self::from_scale(&colormap.into(), n)
    }

    /// Wrap existing entries.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] when `entries` is empty.
    pub fn from_entries(entries: Vec<Rgba>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::invalid("color table must not be empty"));
        }
        Ok(Self { entries })
    }

    /// Returns the entry at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<Rgba> {
        self.entries
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: index as u64,
                len: self.entries.len(),
            })
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; tables hold at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in index order.
    #[must_use]
    pub fn entries(&self) -> &[Rgba] {
        &self.entries
    }

    /// Returns the table with its entries in reverse order.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.entries.reverse();
        self
    }

    /// Unchecked access for callers that validated the index.
    #[inline]
    pub(crate) fn entry(&self, index: usize) -> Rgba {
        self.entries[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::Colormap;

    fn identity_gray(t: f64) -> [f64; 4] {
        [t, t, t, 1.0]
    }

    #[test]
    fn test_gray_table_is_identity() {
        let table = ColorTable::from_scale(&identity_gray, DEFAULT_TABLE_SIZE).unwrap();
        assert_eq!(table.len(), 256);
        for (k, entry) in table.entries().iter().enumerate() {
            let k = u8::try_from(k).unwrap();
            assert_eq!(*entry, [k, k, k, 255]);
        }
    }

    #[test]
    fn test_zero_size_is_invalid() {
        assert!(matches!(
            ColorTable::from_scale(&identity_gray, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_single_entry_samples_start() {
        let table = ColorTable::from_scale(&identity_gray, 1).unwrap();
        assert_eq!(table.entries(), &[[0, 0, 0, 255]]);
    }

    #[test]
    fn test_small_table_endpoints() {
        let table = ColorTable::from_scale(&identity_gray, 3).unwrap();
        assert_eq!(
            table.entries(),
            &[[0, 0, 0, 255], [128, 128, 128, 255], [255, 255, 255, 255]]
        );
    }

    #[test]
    fn test_channels_are_clamped() {
        let table = ColorTable::from_scale(&|_t: f64| [-0.5, 2.0, 0.5, 1.0], 4).unwrap();
        assert!(table.entries().iter().all(|e| *e == [0, 255, 128, 255]));
    }

    #[test]
    fn test_viridis_endpoints_match_matplotlib() {
        let table = ColorTable::from_colormap(Colormap::Viridis, 256).unwrap();
        assert_eq!(table.get(0).unwrap(), [68, 1, 84, 255]);
        assert_eq!(table.get(255).unwrap(), [253, 231, 37, 255]);
    }

    #[test]
    fn test_get_is_bounds_checked() {
        let table = ColorTable::from_scale(&identity_gray, 10).unwrap();
        assert_eq!(
            table.get(10),
            Err(Error::IndexOutOfRange { index: 10, len: 10 })
        );
    }

    #[test]
    fn test_reversed_and_from_entries() {
        let table = ColorTable::from_entries(vec![[1, 2, 3, 4], [5, 6, 7, 8]])
            .unwrap()
            .reversed();
        assert_eq!(table.entries(), &[[5, 6, 7, 8], [1, 2, 3, 4]]);
        assert!(ColorTable::from_entries(Vec::new()).is_err());
    }
}
