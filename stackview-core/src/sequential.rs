//! Light and dark sequential palettes built around a target color.
//!
//! Both palettes keep the hue and saturation of the target and walk its
//! HSL lightness, towards white (light) or up from black (dark).

use std::str::FromStr;

use palette::{encoding, FromColor, Hsl, Srgb};

use crate::scale::{ListedScale, UnitRgba};
use crate::util::usize_to_f64;
use crate::{Error, Result};

/// Default number of palette steps.
pub const DEFAULT_STEPS: usize = 256;

/// Color a sequential palette is built around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetColor {
    rgb: [f64; 3],
}

impl TargetColor {
    /// Build from RGB components.
    ///
    /// Components whose maximum exceeds 1 are read as 0-255 values.
    #[must_use]
    pub fn from_components(rgb: [f64; 3]) -> Self {
        let max = rgb.iter().copied().fold(f64::MIN, f64::max);
        let rgb = if max > 1.0 {
            rgb.map(|c| c / 255.0)
        } else {
            rgb
        };
        Self {
            rgb: rgb.map(|c| c.clamp(0.0, 1.0)),
        }
    }

    /// Returns unit-range RGB components.
    #[must_use]
    pub fn rgb(&self) -> [f64; 3] {
        self.rgb
    }
}

impl Default for TargetColor {
    fn default() -> Self {
        Self::from_components([255.0, 165.0, 2.0])
    }
}

impl From<[u8; 3]> for TargetColor {
    fn from(rgb: [u8; 3]) -> Self {
        Self {
            rgb: rgb.map(|c| f64::from(c) / 255.0),
        }
    }
}

impl FromStr for TargetColor {
    type Err = Error;

    /// Parse a CSS color name or a `#rgb` / `#rrggbb` hex string.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let rgb = if name.starts_with('#') {
            name.parse::<Srgb<u8>>()
                .map_err(|e| Error::invalid(format!("invalid hex color '{s}': {e}")))?
        } else {
            palette::named::from_str(&name)
                .ok_or_else(|| Error::invalid(format!("unknown color name '{s}'")))?
        };
        let (r, g, b) = rgb.into_components();
        Ok(Self::from([r, g, b]))
    }
}

/// Palette from the target color towards white.
///
/// Entry `i - 1` has lightness `base + (1 - base) * i / steps`, so the last
/// entry is white and the first is just lighter than the target.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `steps` is zero.
pub fn light_sequential(target: TargetColor, steps: usize, reverse: bool) -> Result<ListedScale> {
    sequential(target, steps, reverse, |base, frac| base + (1.0 - base) * frac)
}

/// Palette from black up to the target color.
///
/// Entry `i - 1` has lightness `base * i / steps`, so the last entry is the
/// target itself.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] when `steps` is zero.
pub fn dark_sequential(target: TargetColor, steps: usize, reverse: bool) -> Result<ListedScale> {
    sequential(target, steps, reverse, |base, frac| base * frac)
}

fn sequential(
    target: TargetColor,
    steps: usize,
    reverse: bool,
    lightness: impl Fn(f64, f64) -> f64,
) -> Result<ListedScale> {
    if steps == 0 {
        return Err(Error::invalid("palette steps must be positive"));
    }
    let [r, g, b] = target.rgb;
    let base = Hsl::<encoding::Srgb, f64>::from_color(Srgb::new(r, g, b));
    let total = usize_to_f64(steps);
    let mut colors = (1..=steps)
        .map(|i| {
            let mut hsl = base;
            hsl.lightness = lightness(base.lightness, usize_to_f64(i) / total);
            let (r, g, b) = Srgb::<f64>::from_color(hsl).into_components();
            [r, g, b, 1.0]
        })
        .collect::<Vec<UnitRgba>>();
    if reverse {
        colors.reverse();
    }
    ListedScale::new(colors).ok_or_else(|| Error::invalid("palette must not be empty"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ColorScale;
    use approx::assert_relative_eq;

    #[test]
    fn test_components_above_one_are_byte_scaled() {
        let target = TargetColor::from_components([255.0, 0.0, 51.0]);
        assert_relative_eq!(target.rgb()[0], 1.0);
        assert_relative_eq!(target.rgb()[2], 0.2);

        let unit = TargetColor::from_components([0.5, 0.25, 1.0]);
        assert_eq!(unit.rgb(), [0.5, 0.25, 1.0]);
    }

    #[test]
    fn test_parse_names_and_hex() {
        let orange: TargetColor = "Orange".parse().unwrap();
        assert_eq!(orange, TargetColor::from([255, 165, 0]));

        let hex: TargetColor = "#ff8000".parse().unwrap();
        assert_eq!(hex, TargetColor::from([255, 128, 0]));

        let short: TargetColor = "#0f0".parse().unwrap();
        assert_eq!(short, TargetColor::from([0, 255, 0]));

        let plain: TargetColor = " #FF8000 ".parse().unwrap();
        assert_eq!(plain, hex);

        assert!("#12345".parse::<TargetColor>().is_err());
        assert!("#gg0000".parse::<TargetColor>().is_err());
        assert!("not-a-color".parse::<TargetColor>().is_err());
    }

    #[test]
    fn test_full_css_name_table() {
        let dark_orange: TargetColor = "darkorange".parse().unwrap();
        assert_eq!(dark_orange, TargetColor::from([255, 140, 0]));

        let light_blue: TargetColor = "LightBlue".parse().unwrap();
        assert_eq!(light_blue, TargetColor::from([173, 216, 230]));

        let rebecca: TargetColor = "rebeccapurple".parse().unwrap();
        assert_eq!(rebecca, TargetColor::from([102, 51, 153]));
    }

    #[test]
    fn test_light_palette_ends_white() {
        let palette = light_sequential(TargetColor::default(), 16, false).unwrap();
        assert_eq!(palette.len(), 16);
        let last = palette.colors()[15];
        for c in &last[..3] {
            assert_relative_eq!(*c, 1.0, epsilon = 1e-9);
        }
        assert_relative_eq!(last[3], 1.0);
    }

    #[test]
    fn test_dark_palette_ends_at_target() {
        let target = TargetColor::from([40, 120, 200]);
        let palette = dark_sequential(target, 8, false).unwrap();
        let last = palette.colors()[7];
        for c in 0..3 {
            assert_relative_eq!(last[c], target.rgb()[c], epsilon = 1e-9);
        }
        // Lightness grows monotonically towards the target.
        let lightness: Vec<f64> = palette
            .colors()
            .iter()
            .map(|c| {
                let hsl = Hsl::<encoding::Srgb, f64>::from_color(Srgb::new(c[0], c[1], c[2]));
                hsl.lightness
            })
            .collect();
        assert!(lightness.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_reverse_flips_order() {
        let target = TargetColor::default();
        let fwd = dark_sequential(target, 5, false).unwrap();
        let rev = dark_sequential(target, 5, true).unwrap();
        assert_eq!(fwd.clone().reversed(), rev);
        assert_eq!(fwd.sample(0.0), rev.sample(1.0));
    }

    #[test]
    fn test_zero_steps_is_invalid() {
        assert!(matches!(
            light_sequential(TargetColor::default(), 0, false),
            Err(Error::InvalidArgument(_))
        ));
    }
}
