use crate::canvas::Canvas;
use crate::config::ChalkboardConfig;
use crate::device;
use crate::input::{KeyboardSubscription, Trigger};
use crate::notify::Toasts;
use crate::panels;
use crate::session::Session;
use crate::surface::RenderConfig;

/// The chalkboard window: palette, canvas and toasts around one session.
#[derive(Debug)]
pub struct ChalkboardApp {
    session: Session<Canvas, Toasts>,
    keyboard: KeyboardSubscription,
    // Latched once a touch has been seen
    touch_first: bool,
}

impl Default for ChalkboardApp {
    fn default() -> Self {
        Self::with_config(&ChalkboardConfig::default())
    }
}

impl ChalkboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &ChalkboardConfig) -> Self {
        let mut app = Self::with_config(config);
        app.touch_first = device::is_mobile_or_tablet(&cc.egui_ctx);
        app
    }

    pub fn with_config(config: &ChalkboardConfig) -> Self {
        let session = Session::with_config(
            config,
            Canvas::new(),
            Toasts::from_settings(&config.notifications),
        );
        let keyboard = KeyboardSubscription::subscribe(session.dispatcher());
        Self {
            session,
            keyboard,
            touch_first: false,
        }
    }

    pub fn session(&self) -> &Session<Canvas, Toasts> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<Canvas, Toasts> {
        &mut self.session
    }

    pub fn render_config(&self) -> RenderConfig {
        self.session.render_config(self.touch_first)
    }

    /// Run this frame's triggers through the session, in arrival order.
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        self.touch_first |= device::is_mobile_or_tablet(ctx);
        for trigger in self.keyboard.poll(ctx) {
            self.session.handle(trigger);
        }
    }

    pub fn end_session(&mut self) {
        self.keyboard.unsubscribe();
    }

    /// Lay out one frame: palette swatches, canvas, then toasts on top.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.handle_input(ctx);

        if let Some(color) = panels::swatch_bar(ctx) {
            self.session.handle(Trigger::Swatch(color));
        }

        panels::canvas_panel(self, ctx);

        self.session.notifier_mut().show(ctx);
    }
}

impl eframe::App for ChalkboardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.end_session();
    }
}
