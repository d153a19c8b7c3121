//! Control panel (left sidebar) rendering.

use eframe::egui;
use stackview_core::Colormap;

use crate::app::StackviewApp;

impl StackviewApp {
    /// Render the left control panel.
    pub(crate) fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("ctrl")
            .default_width(240.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        egui::CollapsingHeader::new("Frame")
                            .default_open(true)
                            .show(ui, |ui| self.render_frame_slider(ui));

                        egui::CollapsingHeader::new("View")
                            .default_open(true)
                            .show(ui, |ui| self.render_view_options(ui));

                        egui::CollapsingHeader::new("Stack")
                            .default_open(false)
                            .show(ui, |ui| self.render_stack_controls(ui));
                    });
            });
    }

    fn render_frame_slider(&mut self, ui: &mut egui::Ui) {
        let range = self.browser.slider_range();
        let enabled = self.browser.len() > 1;
        let response = ui.add_enabled(
            enabled,
            egui::Slider::new(&mut self.view.index, range).text("index"),
        );
        if response.changed() {
            self.needs_refresh = true;
        }
    }

    /// Render view options (colormap, toggles, cutoffs).
    fn render_view_options(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        ui.label("Colormap");
        let selected = self
            .view
            .colormap
            .map_or_else(|| "none".to_string(), |c| c.to_string());
        egui::ComboBox::from_id_salt("colormap_select")
            .selected_text(selected)
            .width(ui.available_width() - 8.0)
            .show_ui(ui, |ui| {
                changed |= ui
                    .selectable_value(&mut self.view.colormap, None, "none")
                    .changed();
                for cmap in Colormap::ALL {
                    changed |= ui
                        .selectable_value(&mut self.view.colormap, Some(cmap), cmap.to_string())
                        .changed();
                }
            });

        ui.add_enabled_ui(self.view.colormap.is_some(), |ui| {
            changed |= ui.checkbox(&mut self.view.reversed, "Reversed").changed();
        });
        ui.add_space(8.0);

        changed |= ui
            .checkbox(&mut self.view.enhance_contrast, "Enhance contrast")
            .changed();
        changed |= ui
            .checkbox(&mut self.view.antialiasing, "Antialiasing")
            .changed();

        ui.horizontal(|ui| {
            ui.label("Zoom");
            changed |= ui
                .add(egui::DragValue::new(&mut self.view.zoom).range(1..=8).suffix("x"))
                .changed();
        });
        ui.add_space(8.0);

        changed |= ui.checkbox(&mut self.view.cutoff_enabled, "Cutoff").changed();
        ui.add_enabled_ui(self.view.cutoff_enabled, |ui| {
            ui.horizontal(|ui| {
                ui.label("min");
                changed |= ui
                    .add(egui::DragValue::new(&mut self.view.cutoff_min).speed(0.01))
                    .changed();
                ui.label("max");
                changed |= ui
                    .add(egui::DragValue::new(&mut self.view.cutoff_max).speed(0.01))
                    .changed();
            });
        });

        if changed {
            self.apply_view_options();
        }
    }

    /// Synthetic moving-square stack parameters.
    fn render_stack_controls(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("stack_grid").num_columns(2).show(ui, |ui| {
            ui.label("Frames");
            ui.add(egui::DragValue::new(&mut self.demo_steps).range(1..=500));
            ui.end_row();

            ui.label("Size");
            ui.add(
                egui::DragValue::new(&mut self.demo_size)
                    .range(8..=2048)
                    .suffix(" px"),
            );
            ui.end_row();

            ui.label("Step");
            ui.add(
                egui::DragValue::new(&mut self.demo_factor)
                    .range(0..=64)
                    .suffix(" px"),
            );
            ui.end_row();
        });

        if ui.button("Regenerate").clicked() {
            self.regenerate_stack();
        }
    }
}
