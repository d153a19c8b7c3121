//! Stackview GUI application entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod state;
mod ui;
mod util;

use anyhow::Context;
use app::StackviewApp;
use eframe::egui;
use stackview_core::PlotStyle;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let style = PlotStyle::paper(10.0, true);
    let app = StackviewApp::with_demo_stack(style).context("building demo stack")?;

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Stackview",
        opts,
        Box::new(move |cc| {
            ui::theme::configure_style(&cc.egui_ctx, app.plot_style());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
