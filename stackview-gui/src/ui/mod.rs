//! UI rendering modules.
//!
//! Contains the UI rendering logic split into separate modules:
//! - `control_panel`: Left sidebar with frame slider and view options
//! - `main_view`: Central panel with the rendered frame and status bar
//! - `theme`: Text and visuals derived from the plot style

mod control_panel;
mod main_view;
pub mod theme;
