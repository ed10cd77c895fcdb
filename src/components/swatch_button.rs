use eframe::egui;

use crate::brush::BrushColor;

pub const SWATCH_SIZE: f32 = 50.0;
const BORDER_WIDTH: f32 = 5.0;

/// A square of solid palette color with a border along its top and bottom
pub struct SwatchButton {
    pub color: BrushColor,
}

impl SwatchButton {
    pub fn new(color: BrushColor) -> Self {
        Self { color }
    }

    /// White would vanish against a white border
    pub fn border_color(&self) -> egui::Color32 {
        match self.color {
            BrushColor::White => egui::Color32::BLACK,
            _ => egui::Color32::WHITE,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(SWATCH_SIZE, SWATCH_SIZE);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, self.color.to_color32());

            let border = egui::Stroke::new(BORDER_WIDTH, self.border_color());
            let inset = BORDER_WIDTH / 2.0;
            painter.hline(rect.x_range(), rect.top() + inset, border);
            painter.hline(rect.x_range(), rect.bottom() - inset, border);
        }

        response.on_hover_text(self.color.name())
    }
}
