//! Continuous color scales.
//!
//! A color scale maps a normalized value in `[0, 1]` to an RGBA color with
//! every channel in `[0, 1]`. Color tables are built by sampling a scale.

/// RGBA color with unit-range channels.
pub type UnitRgba = [f64; 4];

/// A continuous color scale `[0, 1] -> RGBA`.
pub trait ColorScale {
    /// Sample the scale at `t`. Implementations clamp `t` to `[0, 1]`.
    fn sample(&self, t: f64) -> UnitRgba;
}

impl<F> ColorScale for F
where
    F: Fn(f64) -> UnitRgba,
{
    fn sample(&self, t: f64) -> UnitRgba {
        self(t)
    }
}

/// A discrete list of colors sampled like a listed colormap.
///
/// `t` selects entry `floor(t * len)`, with `t = 1` landing on the last
/// entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedScale {
    colors: Vec<UnitRgba>,
}

impl ListedScale {
    /// Creates a listed scale. Returns `None` when `colors` is empty.
    #[must_use]
    pub fn new(colors: Vec<UnitRgba>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Returns the colors in order.
    #[must_use]
    pub fn colors(&self) -> &[UnitRgba] {
        &self.colors
    }

    /// Returns the number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a listed scale holds at least one color.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the scale with its colors in reverse order.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.colors.reverse();
        self
    }
}

impl ColorScale for ListedScale {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn sample(&self, t: f64) -> UnitRgba {
        let n = self.colors.len();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let idx = ((t * n as f64) as usize).min(n - 1);
        self.colors[idx]
    }
}
