//! Main application state and logic.
//!
//! Contains the `StackviewApp` struct which owns the stack browser, the
//! view controls and the cached frame texture.

use eframe::egui;
use log::warn;

use stackview_core::{moving_square, PlotStyle, StackBrowser};

use crate::state::ViewState;

/// Main application state.
pub struct StackviewApp {
    /// Browser over the loaded stack.
    pub(crate) browser: StackBrowser<f32>,
    /// Control panel state.
    pub(crate) view: ViewState,
    /// Style applied to text at startup.
    pub(crate) plot_style: PlotStyle,

    /// Cached texture for the current frame.
    pub(crate) texture: Option<egui::TextureHandle>,
    /// The frame must be re-rendered before the next paint.
    pub(crate) needs_refresh: bool,
    /// Size of the cached frame as `[width, height]`.
    pub(crate) frame_size: [usize; 2],
    /// Current cursor position in frame pixels.
    pub(crate) cursor_info: Option<(usize, usize)>,
    /// User-facing status message.
    pub(crate) status_text: String,

    /// Synthetic stack parameters.
    pub(crate) demo_steps: usize,
    pub(crate) demo_size: usize,
    pub(crate) demo_factor: usize,
}

impl StackviewApp {
    /// Create the app over a synthetic moving-square stack.
    pub fn with_demo_stack(plot_style: PlotStyle) -> stackview_core::Result<Self> {
        let view = ViewState::default();
        let (steps, size, factor) = (10, 200, 3);
        let stack = moving_square(steps, (size, size), factor).into_dyn();
        let browser = StackBrowser::new(stack, view.browse_options())?;
        Ok(Self {
            browser,
            view,
            plot_style,
            texture: None,
            needs_refresh: true,
            frame_size: [size, size],
            cursor_info: None,
            status_text: "Ready".to_string(),
            demo_steps: steps,
            demo_size: size,
            demo_factor: factor,
        })
    }

    /// Style the app was configured with.
    pub fn plot_style(&self) -> &PlotStyle {
        &self.plot_style
    }

    /// Regenerate the synthetic stack from the demo parameters.
    pub(crate) fn regenerate_stack(&mut self) {
        let stack = moving_square(
            self.demo_steps.max(1),
            (self.demo_size.max(1), self.demo_size.max(1)),
            self.demo_factor,
        )
        .into_dyn();
        match StackBrowser::new(stack, self.view.browse_options()) {
            Ok(browser) => {
                self.browser = browser;
                self.view.index = self.view.index.min(*self.browser.slider_range().end());
                self.needs_refresh = true;
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Push the control panel options into the browser.
    pub(crate) fn apply_view_options(&mut self) {
        match self.browser.set_options(self.view.browse_options()) {
            Ok(()) => self.needs_refresh = true,
            Err(e) => self.report_error(&e),
        }
    }

    /// Render the current frame into the texture cache.
    pub(crate) fn refresh_texture(&mut self, ctx: &egui::Context) {
        self.needs_refresh = false;
        match self.browser.on_index_change(self.view.index) {
            Ok(frame) => {
                let rgba = frame.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                self.texture = Some(ctx.load_texture("frame", image, egui::TextureOptions::NEAREST));
                self.frame_size = size;
                self.status_text = format!(
                    "Frame {} / {} ({}x{})",
                    self.view.index + 1,
                    self.browser.len(),
                    size[0],
                    size[1]
                );
            }
            Err(e) => {
                self.texture = None;
                self.report_error(&e);
            }
        }
    }

    fn report_error(&mut self, err: &stackview_core::Error) {
        warn!("{err}");
        self.status_text = format!("Error: {err}");
    }
}

impl eframe::App for StackviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_side_panel(ctx);
        if self.needs_refresh {
            self.refresh_texture(ctx);
        }
        self.render_status_bar(ctx);
        self.render_central_panel(ctx);
    }
}
