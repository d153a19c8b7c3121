//! Application theme derived from a [`PlotStyle`].
//!
//! The style is passed in explicitly; text sizes and visuals are set on the
//! given context only.

use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};
use stackview_core::{AxesStyle, PlotStyle};

/// Pixels per typographic point.
const PX_PER_PT: f32 = 4.0 / 3.0;

/// Configure text styles and visuals for `style`.
pub fn configure_style(ctx: &egui::Context, style: &PlotStyle) {
    let family = match style.font_family {
        stackview_core::FontFamily::Monospace => FontFamily::Monospace,
        stackview_core::FontFamily::SansSerif | stackview_core::FontFamily::Serif => {
            FontFamily::Proportional
        }
    };
    let body = style.font_size * PX_PER_PT;

    ctx.style_mut(|s| {
        s.text_styles = [
            (TextStyle::Heading, FontId::new(body * 1.4, family.clone())),
            (TextStyle::Body, FontId::new(body, family.clone())),
            (TextStyle::Button, FontId::new(body, family.clone())),
            (TextStyle::Small, FontId::new(body * 0.8, family)),
            (TextStyle::Monospace, FontId::new(body, FontFamily::Monospace)),
        ]
        .into();
        s.spacing.item_spacing = egui::vec2(8.0, 6.0);
    });

    if style.axes_style == AxesStyle::Ticks {
        ctx.set_visuals(build_paper_visuals());
    }
}

/// White panels with thin dark strokes, like a paper figure.
fn build_paper_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.panel_fill = Color32::WHITE;
    visuals.window_fill = Color32::WHITE;
    visuals.extreme_bg_color = Color32::from_rgb(0xf5, 0xf5, 0xf5);
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Color32::from_gray(0x33));
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Color32::from_gray(0x1a));
    visuals
}
