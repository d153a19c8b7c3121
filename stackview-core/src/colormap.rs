//! Named colormap definitions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scale::{ColorScale, UnitRgba};
use crate::{Error, Result};

/// Available named colormaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Colormap {
    /// Grayscale - black to white.
    #[default]
    Gray,
    /// Hot (Thermal) - black to red to yellow to white.
    Hot,
    /// Jet - blue to cyan to yellow to red.
    Jet,
    /// Green (Matrix style) - black to bright green.
    Green,
    /// Viridis - perceptually uniform, blue to teal to yellow.
    Viridis,
    /// Magma - black to purple to pale yellow.
    Magma,
    /// Inferno - black to purple to orange to pale yellow.
    Inferno,
    /// Plasma - blue to magenta to yellow.
    Plasma,
}

// Breakpoints of matplotlib's `hot`.
const HOT_RED_END: f64 = 0.365_079;
const HOT_GREEN_END: f64 = 0.746_032;

impl Colormap {
    /// All colormaps in display order.
    pub const ALL: [Colormap; 8] = [
        Colormap::Gray,
        Colormap::Hot,
        Colormap::Jet,
        Colormap::Green,
        Colormap::Viridis,
        Colormap::Magma,
        Colormap::Inferno,
        Colormap::Plasma,
    ];

    /// Canonical lowercase name, as accepted by [`Colormap::from_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Colormap::Gray => "gray",
            Colormap::Hot => "hot",
            Colormap::Jet => "jet",
            Colormap::Green => "green",
            Colormap::Viridis => "viridis",
            Colormap::Magma => "magma",
            Colormap::Inferno => "inferno",
            Colormap::Plasma => "plasma",
        }
    }

    /// Look up a colormap by name. A `_r` suffix selects the reversed map.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for unknown names.
    pub fn from_name(name: &str) -> Result<NamedScale> {
        let lower = name.trim().to_ascii_lowercase();
        let (base, reversed) = match lower.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };
        let colormap = match base {
            "gray" | "grey" | "grayscale" => Colormap::Gray,
            "hot" => Colormap::Hot,
            "jet" => Colormap::Jet,
            "green" => Colormap::Green,
            "viridis" => Colormap::Viridis,
            "magma" => Colormap::Magma,
            "inferno" => Colormap::Inferno,
            "plasma" => Colormap::Plasma,
            _ => return Err(Error::invalid(format!("unknown colormap '{name}'"))),
        };
        Ok(NamedScale {
            colormap,
            reversed,
        })
    }

    /// Apply the colormap to a normalized value [0, 1].
    #[must_use]
    pub fn apply(self, val: f64) -> UnitRgba {
        let t = if val.is_nan() { 0.0 } else { val.clamp(0.0, 1.0) };
        match self {
            Colormap::Gray => [t, t, t, 1.0],
            Colormap::Green => [0.0, t, 0.0, 1.0],
            Colormap::Hot => {
                let r = (t / HOT_RED_END).min(1.0);
                let g = ((t - HOT_RED_END) / (HOT_GREEN_END - HOT_RED_END)).clamp(0.0, 1.0);
                let b = ((t - HOT_GREEN_END) / (1.0 - HOT_GREEN_END)).clamp(0.0, 1.0);
                [r, g, b, 1.0]
            }
            Colormap::Jet => {
                let channel = |center: f64| (1.5 - (4.0 * t - center).abs()).clamp(0.0, 1.0);
                [channel(3.0), channel(2.0), channel(1.0), 1.0]
            }
            Colormap::Viridis => gradient(colorous::VIRIDIS, t),
            Colormap::Magma => gradient(colorous::MAGMA, t),
            Colormap::Inferno => gradient(colorous::INFERNO, t),
            Colormap::Plasma => gradient(colorous::PLASMA, t),
        }
    }
}

/// Sample one of the 256-entry perceptual tables.
fn gradient(gradient: colorous::Gradient, t: f64) -> UnitRgba {
    let c = gradient.eval_continuous(t);
    [
        f64::from(c.r) / 255.0,
        f64::from(c.g) / 255.0,
        f64::from(c.b) / 255.0,
        1.0,
    ]
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colormap::Gray => write!(f, "Grayscale"),
            Colormap::Hot => write!(f, "Hot (Thermal)"),
            Colormap::Jet => write!(f, "Jet"),
            Colormap::Green => write!(f, "Green (Matrix)"),
            Colormap::Viridis => write!(f, "Viridis"),
            Colormap::Magma => write!(f, "Magma"),
            Colormap::Inferno => write!(f, "Inferno"),
            Colormap::Plasma => write!(f, "Plasma"),
        }
    }
}

impl ColorScale for Colormap {
    fn sample(&self, t: f64) -> UnitRgba {
        self.apply(t)
    }
}

/// A named colormap, optionally reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedScale {
    /// Base colormap.
    pub colormap: Colormap,
    /// Sample the map from 1 to 0 instead of 0 to 1.
    pub reversed: bool,
}

impl NamedScale {
    /// Name as accepted by [`Colormap::from_name`], including the `_r` suffix.
    #[must_use]
    pub fn name(&self) -> String {
        if self.reversed {
            format!("{}_r", self.colormap.name())
        } else {
            self.colormap.name().to_string()
        }
    }
}

impl From<Colormap> for NamedScale {
    fn from(colormap: Colormap) -> Self {
        Self {
            colormap,
            reversed: false,
        }
    }
}

impl FromStr for NamedScale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Colormap::from_name(s)
    }
}

impl ColorScale for NamedScale {
    fn sample(&self, t: f64) -> UnitRgba {
        let t = if self.reversed { 1.0 - t } else { t };
        self.colormap.apply(t)
    }
}
