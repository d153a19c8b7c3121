//! Application state modules.

mod view;

pub use view::ViewState;
