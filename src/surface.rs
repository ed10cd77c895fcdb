use crate::brush::{BrushColor, BrushConfig};

/// The part of the drawing surface the session is allowed to drive.
///
/// Stroke capture and rasterization stay inside the implementation, which
/// also owns the stroke history. Both commands are infallible from the
/// caller's point of view.
pub trait DrawingSurface {
    /// Remove every stroke, history included. Calling it on an empty canvas
    /// changes nothing.
    fn erase_all(&mut self);

    /// Remove the most recently committed stroke, if there is one.
    fn undo_last_stroke(&mut self);
}

/// Inputs the surface needs on every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub color: BrushColor,
    pub radius: u32,
    pub pan_zoom_enabled: bool,
}

impl RenderConfig {
    pub fn new(brush: &BrushConfig, pan_zoom_enabled: bool) -> Self {
        Self {
            color: brush.color(),
            radius: brush.radius(),
            pan_zoom_enabled,
        }
    }
}
