mod canvas_panel;
mod swatch_bar;

pub use canvas_panel::canvas_panel;
pub use swatch_bar::{SWATCH_MARGIN, SWATCH_SPACING, swatch_bar};
