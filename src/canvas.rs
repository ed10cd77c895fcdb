use egui::{Color32, Pos2, Rect, Response, Sense, Shape, Ui, Vec2};

use crate::stroke::{MutableStroke, Stroke};
use crate::surface::{DrawingSurface, RenderConfig};

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 10.0;

/// Maps canvas coordinates to screen coordinates relative to the canvas rect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub offset: Vec2,
    pub zoom: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    pub fn to_screen(&self, rect: Rect, pos: Pos2) -> Pos2 {
        rect.min + self.offset + pos.to_vec2() * self.zoom
    }

    pub fn to_canvas(&self, rect: Rect, pos: Pos2) -> Pos2 {
        ((pos - rect.min - self.offset) / self.zoom).to_pos2()
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Scale by `factor`, keeping the canvas point under `anchor` in place.
    pub fn zoom_about(&mut self, rect: Rect, anchor: Pos2, factor: f32) {
        let fixed = self.to_canvas(rect, anchor);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.offset = anchor - rect.min - fixed.to_vec2() * self.zoom;
    }
}

/// The chalkboard drawing surface.
///
/// Records strokes from primary pointer drags and keeps them as its own
/// undo history.
#[derive(Debug, Default)]
pub struct Canvas {
    strokes: Vec<Stroke>,
    current_stroke: Option<MutableStroke>,
    view: ViewTransform,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Handle this frame's pointer input and paint every stroke.
    pub fn show(&mut self, ui: &mut Ui, config: &RenderConfig) -> Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;

        let gesturing = config.pan_zoom_enabled && self.apply_gestures(ui, &response);
        if gesturing {
            // A second finger turns the drag into a gesture
            self.current_stroke = None;
        } else {
            self.track_pointer(ui, &response, config);
        }

        for stroke in &self.strokes {
            self.paint_stroke(&painter, rect, stroke.points(), stroke.radius(), stroke.color());
        }
        if let Some(stroke) = &self.current_stroke {
            self.paint_stroke(&painter, rect, stroke.points(), stroke.radius(), stroke.color());
        }

        response
    }

    fn apply_gestures(&mut self, ui: &Ui, response: &Response) -> bool {
        let rect = response.rect;
        let (zoom_delta, scroll_delta, touch, hover_pos) = ui.input(|i| {
            (
                i.zoom_delta(),
                i.smooth_scroll_delta,
                i.multi_touch(),
                i.pointer.hover_pos(),
            )
        });

        if let Some(touch) = &touch {
            self.view.pan(touch.translation_delta);
        } else if response.hovered() {
            self.view.pan(scroll_delta);
        }

        if zoom_delta != 1.0 {
            let anchor = touch
                .as_ref()
                .map(|t| t.start_pos)
                .or(hover_pos)
                .unwrap_or_else(|| rect.center());
            self.view.zoom_about(rect, anchor, zoom_delta);
        }

        touch.is_some()
    }

    fn track_pointer(&mut self, ui: &Ui, response: &Response, config: &RenderConfig) {
        let rect = response.rect;
        let color = config.color.to_color32();
        let radius = config.radius as f32;

        if response.drag_started() {
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            let mut stroke = MutableStroke::new(color, radius);
            if let Some(pos) = origin {
                stroke.add_point(self.view.to_canvas(rect, pos));
            }
            self.current_stroke = Some(stroke);
        }

        if response.dragged() {
            if let (Some(stroke), Some(pos)) =
                (&mut self.current_stroke, response.interact_pointer_pos())
            {
                stroke.add_point(self.view.to_canvas(rect, pos));
            }
        }

        if response.drag_stopped() {
            if let Some(stroke) = self.current_stroke.take().and_then(MutableStroke::finish) {
                log::trace!("Committed stroke with {} points", stroke.points().len());
                self.add_stroke(stroke);
            }
        } else if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let dot = Stroke::new(color, radius, vec![self.view.to_canvas(rect, pos)]);
                self.add_stroke(dot);
            }
        }
    }

    fn paint_stroke(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        points: &[Pos2],
        radius: f32,
        color: Color32,
    ) {
        let radius = radius * self.view.zoom;
        let screen: Vec<Pos2> = points.iter().map(|p| self.view.to_screen(rect, *p)).collect();

        match screen.len() {
            0 => {}
            1 => {
                painter.circle_filled(screen[0], radius, color);
            }
            len => {
                // Round caps, the line shape itself ends square
                let (first, last) = (screen[0], screen[len - 1]);
                painter.add(Shape::line(screen, egui::Stroke::new(radius * 2.0, color)));
                painter.circle_filled(first, radius, color);
                painter.circle_filled(last, radius, color);
            }
        }
    }
}

impl DrawingSurface for Canvas {
    fn erase_all(&mut self) {
        self.strokes.clear();
        self.current_stroke = None;
    }

    fn undo_last_stroke(&mut self) {
        if self.strokes.pop().is_none() {
            log::debug!("Nothing to undo");
        }
    }
}
