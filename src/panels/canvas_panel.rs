use eframe::egui;

use crate::ChalkboardApp;

/// Black full-window panel hosting the drawing surface
pub fn canvas_panel(app: &mut ChalkboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::BLACK))
        .show(ctx, |ui| {
            let render_config = app.render_config();
            app.session_mut().surface_mut().show(ui, &render_config);
        });
}
