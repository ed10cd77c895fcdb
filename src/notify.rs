use std::time::Duration;

use egui::{Align2, Color32, RichText, Sense};

use crate::config::NotificationSettings;

const TOAST_WIDTH: f32 = 280.0;

/// Receives the message for every committed state change.
///
/// Fire and forget: how long a message stays visible is up to the
/// implementation.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// A single transient message
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    duration: f32,
    elapsed: f32,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            duration: duration.as_secs_f32(),
            elapsed: 0.0,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Fraction of the display time still left, from 1.0 down to 0.0
    pub fn remaining_fraction(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (1.0 - self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}

/// Stack of toasts in the top-right corner, oldest on top.
///
/// Timers only run while the window has focus, and clicking a toast
/// dismisses it early.
#[derive(Debug)]
pub struct Toasts {
    toasts: Vec<Toast>,
    duration: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
        }
    }

    pub fn from_settings(settings: &NotificationSettings) -> Self {
        Self::new(Duration::from_millis(settings.duration_ms))
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }

    /// Advance every timer by `dt` seconds and drop expired toasts.
    pub fn tick(&mut self, dt: f32, focused: bool) {
        if !focused {
            return;
        }
        for toast in &mut self.toasts {
            toast.elapsed += dt;
        }
        self.toasts.retain(|toast| !toast.is_expired());
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let (dt, focused) = ctx.input(|i| (i.stable_dt, i.focused));
        self.tick(dt, focused);
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("chalkboard_toasts"))
            .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for (index, toast) in self.toasts.iter().enumerate() {
                    let response = egui::Frame::none()
                        .fill(Color32::WHITE)
                        .rounding(4.0)
                        .inner_margin(egui::Margin::same(10.0))
                        .show(ui, |ui| {
                            ui.set_width(TOAST_WIDTH);
                            ui.label(RichText::new(&toast.message).color(Color32::from_gray(60)));
                            progress_bar(ui, toast.remaining_fraction());
                        })
                        .response
                        .interact(Sense::click());
                    if response.clicked() {
                        dismissed = Some(index);
                    }
                    ui.add_space(8.0);
                }
            });

        if let Some(index) = dismissed {
            self.dismiss(index);
        }
        ctx.request_repaint();
    }
}

fn progress_bar(ui: &mut egui::Ui, fraction: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(TOAST_WIDTH, 4.0), Sense::hover());
    let mut filled = rect;
    filled.set_width(rect.width() * fraction);
    ui.painter()
        .rect_filled(filled, 0.0, Color32::from_rgb(52, 152, 219));
}

impl Notifier for Toasts {
    fn notify(&mut self, message: &str) {
        log::info!("{message}");
        self.toasts.push(Toast::new(message, self.duration));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_queues_in_order() {
        let mut toasts = Toasts::default();
        toasts.notify("Cleared canvas");
        toasts.notify("Increased brush size");

        let messages: Vec<&str> = toasts.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["Cleared canvas", "Increased brush size"]);
    }

    #[test]
    fn test_toasts_expire_after_duration() {
        let mut toasts = Toasts::new(Duration::from_millis(2000));
        toasts.notify("Cleared canvas");

        toasts.tick(1.5, true);
        assert_eq!(toasts.count(), 1);
        assert!((toasts.toasts()[0].remaining_fraction() - 0.25).abs() < 1e-6);

        toasts.tick(0.5, true);
        assert_eq!(toasts.count(), 0);
    }

    #[test]
    fn test_timers_pause_without_focus() {
        let mut toasts = Toasts::new(Duration::from_millis(2000));
        toasts.notify("Undid last action");

        toasts.tick(10.0, false);
        assert_eq!(toasts.count(), 1);
        assert_eq!(toasts.toasts()[0].remaining_fraction(), 1.0);
    }

    #[test]
    fn test_dismiss() {
        let mut toasts = Toasts::default();
        toasts.notify("a");
        toasts.notify("b");
        toasts.dismiss(0);
        assert_eq!(toasts.toasts()[0].message, "b");

        // Out of range is ignored
        toasts.dismiss(5);
        assert_eq!(toasts.count(), 1);
    }

    #[test]
    fn test_from_settings() {
        let settings = NotificationSettings {
            duration_ms: 500,
            announce_initial_color: false,
        };
        let mut toasts = Toasts::from_settings(&settings);
        toasts.notify("Brush Color set to red");
        toasts.tick(0.5, true);
        assert_eq!(toasts.count(), 0);
    }
}
