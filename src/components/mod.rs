mod swatch_button;

pub use swatch_button::{SWATCH_SIZE, SwatchButton};
