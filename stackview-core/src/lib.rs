//! stackview-core: lookup-table colorization and browsing for image stacks.
//!
//! This crate provides the computational pieces behind the stackview
//! front ends: 256-entry color tables sampled from continuous color
//! scales, per-pixel LUT colorization, named and sequential colormaps,
//! frame preprocessing, a pull-based stack browser, explicit plot styles
//! and figure capture.
//!

pub mod browser;
pub mod color_table;
pub mod colorize;
pub mod colormap;
pub mod error;
pub mod figure;
pub mod preprocess;
pub mod scale;
pub mod sequential;
pub mod style;
pub mod synthetic;
mod util;

pub use browser::{BrowseOptions, StackBrowser};
pub use color_table::{ColorTable, Rgba, DEFAULT_TABLE_SIZE};
pub use colorize::{colorize, colorize_dyn, ColorizedImage};
pub use colormap::{Colormap, NamedScale};
pub use error::{Error, Result};
pub use figure::{grab_figure, FigureCanvas};
pub use preprocess::{ResizeFilter, Sample};
pub use scale::{ColorScale, ListedScale, UnitRgba};
pub use sequential::{dark_sequential, light_sequential, TargetColor};
pub use style::{AxesStyle, FontFamily, PlotStyle, SvgFontType};
pub use synthetic::moving_square;
