//! Plot styling as an explicit configuration value.
//!
//! A [`PlotStyle`] is handed to whatever renders a figure; nothing here
//! touches process-wide defaults.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Font family used for figure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

impl FontFamily {
    fn rc_name(self) -> &'static str {
        match self {
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Serif => "serif",
            FontFamily::Monospace => "monospace",
        }
    }
}

/// How axes are decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxesStyle {
    /// Library defaults.
    Plain,
    /// White background with outward tick marks.
    #[default]
    Ticks,
}

/// How text is embedded when saving vector graphics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SvgFontType {
    /// Keep text as text so it stays editable.
    #[default]
    None,
    /// Convert glyphs to paths.
    Path,
}

/// Style settings for publication figures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotStyle {
    /// Size in points for labels, tick labels, legends and titles.
    pub font_size: f32,
    /// Generic font family.
    pub font_family: FontFamily,
    /// Preferred sans-serif fonts, in order.
    pub sans_serif: Vec<String>,
    /// Text handling in SVG output.
    pub svg_font_type: SvgFontType,
    /// PDF font type; 42 embeds TrueType.
    pub pdf_font_type: u8,
    /// Axes decoration.
    pub axes_style: AxesStyle,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::paper(8.0, true)
    }
}

impl PlotStyle {
    /// Style for paper figures at the given font size.
    ///
    /// `use_seaborn` selects the white background with tick marks.
    #[must_use]
    pub fn paper(font_size: f32, use_seaborn: bool) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            sans_serif: vec!["Arial".to_string()],
            svg_font_type: SvgFontType::None,
            pdf_font_type: 42,
            axes_style: if use_seaborn {
                AxesStyle::Ticks
            } else {
                AxesStyle::Plain
            },
        }
    }

    /// Sets the font size.
    #[must_use]
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Matplotlib-style rc parameters for this style.
    #[must_use]
    pub fn rc_params(&self) -> BTreeMap<&'static str, String> {
        let size = self.font_size.to_string();
        let mut params = BTreeMap::new();
        for key in [
            "axes.labelsize",
            "xtick.labelsize",
            "ytick.labelsize",
            "legend.fontsize",
            "axes.titlesize",
        ] {
            params.insert(key, size.clone());
        }
        params.insert("font.family", self.font_family.rc_name().to_string());
        params.insert("font.sans-serif", self.sans_serif.join(", "));
        params.insert(
            "svg.fonttype",
            match self.svg_font_type {
                SvgFontType::None => "none",
                SvgFontType::Path => "path",
            }
            .to_string(),
        );
        params.insert("pdf.fonttype", self.pdf_font_type.to_string());
        if self.axes_style == AxesStyle::Ticks {
            params.insert("axes.facecolor", "white".to_string());
            params.insert("xtick.direction", "out".to_string());
            params.insert("ytick.direction", "out".to_string());
        }
        params
    }
}
