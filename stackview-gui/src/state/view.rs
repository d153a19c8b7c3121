//! View options edited in the control panel.

use stackview_core::{BrowseOptions, Colormap, NamedScale};

/// Frame selection and rendering options.
pub struct ViewState {
    /// Current slider position.
    pub index: usize,
    /// Colormap for grayscale frames; `None` shows plain gray.
    pub colormap: Option<Colormap>,
    /// Sample the colormap from the top end.
    pub reversed: bool,
    /// Min/max contrast stretch per frame.
    pub enhance_contrast: bool,
    /// Lanczos smoothing when resizing.
    pub antialiasing: bool,
    /// Whether the clip range below is applied.
    pub cutoff_enabled: bool,
    /// Lower clip bound.
    pub cutoff_min: f64,
    /// Upper clip bound.
    pub cutoff_max: f64,
    /// Integer zoom applied to the rendered frame.
    pub zoom: u8,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            index: 0,
            colormap: Some(Colormap::Viridis),
            reversed: false,
            enhance_contrast: true,
            antialiasing: false,
            cutoff_enabled: false,
            cutoff_min: 0.0,
            cutoff_max: 1.0,
            zoom: 1,
        }
    }
}

impl ViewState {
    /// Browse options matching the current controls.
    pub fn browse_options(&self) -> BrowseOptions {
        let mut options = BrowseOptions::new()
            .with_enhance_contrast(self.enhance_contrast)
            .with_antialiasing(self.antialiasing);
        if let Some(colormap) = self.colormap {
            options = options.with_colormap(NamedScale {
                colormap,
                reversed: self.reversed,
            });
        }
        if self.cutoff_enabled {
            options = options.with_cutoff(Some(self.cutoff_min), Some(self.cutoff_max));
        }
        if self.zoom > 1 {
            options = options.with_resize(f64::from(self.zoom));
        }
        options
    }
}
