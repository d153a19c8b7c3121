//! Main view (central panel) and status bar rendering.

use eframe::egui;
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::app::StackviewApp;
use crate::util::{f64_to_usize_bounded, usize_to_f32, usize_to_f64};

impl StackviewApp {
    /// Render the central panel with the current frame.
    pub(crate) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(tex) = &self.texture else {
                ui.centered_and_justified(|ui| ui.label("No frame"));
                return;
            };
            let [width, height] = self.frame_size;
            let (w, h) = (usize_to_f64(width), usize_to_f64(height));

            Plot::new("frame_plot")
                .data_aspect(1.0)
                .show_grid(false)
                .show(ui, |plot_ui| {
                    plot_ui.image(PlotImage::new(
                        tex,
                        PlotPoint::new(w / 2.0, h / 2.0),
                        [usize_to_f32(width), usize_to_f32(height)],
                    ));

                    // Plot y grows upwards, frame rows grow downwards.
                    self.cursor_info = plot_ui.pointer_coordinate().and_then(|p| {
                        let x = f64_to_usize_bounded(p.x, width)?;
                        let y = f64_to_usize_bounded(h - p.y, height)?;
                        Some((x, y))
                    });
                });
        });
    }

    /// Render the bottom status bar.
    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_text);
                if let Some((x, y)) = self.cursor_info {
                    ui.separator();
                    ui.label(format!("x: {x}, y: {y}"));
                }
            });
        });
    }
}
