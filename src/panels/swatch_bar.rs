use eframe::egui;

use crate::brush::BrushColor;
use crate::components::SwatchButton;

/// Gap between the window corner and the first swatch
pub const SWATCH_MARGIN: f32 = 4.0;
/// Horizontal gap between neighbouring swatches
pub const SWATCH_SPACING: f32 = 8.0;

/// Row of palette swatches floating over the top-left corner of the canvas.
///
/// Returns the color whose swatch was clicked this frame, if any.
pub fn swatch_bar(ctx: &egui::Context) -> Option<BrushColor> {
    let mut clicked = None;

    egui::Area::new(egui::Id::new("swatch_bar"))
        .anchor(egui::Align2::LEFT_TOP, egui::Vec2::ZERO)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(SWATCH_SPACING, 0.0);
            egui::Frame::none()
                .inner_margin(egui::Margin::same(SWATCH_MARGIN))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for color in BrushColor::ALL {
                            if SwatchButton::new(color).show(ui).clicked() {
                                log::debug!("Swatch selected: {color}");
                                clicked = Some(color);
                            }
                        }
                    });
                });
        });

    clicked
}
