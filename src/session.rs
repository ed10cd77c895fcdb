//! The drawing session: brush state, command execution and notifications.
//!
//! A [`Session`] is the only writer of the brush configuration. Every command
//! runs to completion before the next one is accepted: the mutation (or the
//! call into the drawing surface) happens first and the notification is sent
//! afterwards.

use crate::brush::{BrushColor, BrushConfig};
use crate::command::{Command, Dispatcher, Outcome, color_message};
use crate::config::ChalkboardConfig;
use crate::input::Trigger;
use crate::notify::Notifier;
use crate::surface::{DrawingSurface, RenderConfig};

pub struct Session<S, N> {
    brush: BrushConfig,
    step: u32,
    surface: S,
    notifier: N,
    dispatcher: Dispatcher,
}

impl<S, N> std::fmt::Debug for Session<S, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("brush", &self.brush)
            .field("step", &self.step)
            .field("bindings", &format!("<{} bindings>", self.dispatcher.bindings().len()))
            .finish()
    }
}

impl<S: DrawingSurface, N: Notifier> Session<S, N> {
    /// Start a session with the default brush and bindings.
    pub fn start(surface: S, notifier: N) -> Self {
        Self::with_config(&ChalkboardConfig::default(), surface, notifier)
    }

    pub fn with_config(config: &ChalkboardConfig, surface: S, notifier: N) -> Self {
        let mut session = Self {
            brush: config.brush.initial_brush(),
            step: config.brush.step,
            surface,
            notifier,
            dispatcher: Dispatcher::default(),
        };
        log::info!(
            "Session started with a {} brush of radius {}",
            session.brush.color(),
            session.brush.radius()
        );

        // The starting color counts as the first color change
        if config.notifications.announce_initial_color {
            session.color_changed(session.brush.color());
        }
        session
    }

    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn render_config(&self, pan_zoom_enabled: bool) -> RenderConfig {
        RenderConfig::new(&self.brush, pan_zoom_enabled)
    }

    /// Resolve `trigger` and run its command. Unbound triggers are ignored.
    pub fn handle(&mut self, trigger: Trigger) -> Option<Outcome> {
        let Some(binding) = self.dispatcher.resolve(trigger).copied() else {
            log::trace!("Ignoring unbound trigger {trigger:?}");
            return None;
        };
        log::debug!("{trigger:?} -> {:?}", binding.command);
        Some(self.execute(binding.command, binding.announce))
    }

    /// Apply `command`, then announce it when `announce` is set.
    ///
    /// Color changes are announced whenever the color actually changes,
    /// independent of `announce`.
    pub fn execute(&mut self, command: Command, announce: bool) -> Outcome {
        let outcome = match command {
            Command::Clear => {
                self.surface.erase_all();
                Outcome::Applied
            }
            Command::Undo => {
                self.surface.undo_last_stroke();
                Outcome::Applied
            }
            Command::IncreaseBrush => {
                self.brush.increase_radius(self.step);
                Outcome::Applied
            }
            Command::DecreaseBrush => {
                if self.brush.decrease_radius(self.step) {
                    Outcome::Applied
                } else {
                    log::debug!("Brush already at its minimum radius of {}", self.brush.radius());
                    Outcome::Unchanged
                }
            }
            Command::SetColor(color) => {
                return match self.brush.set_color(color) {
                    Some(_) => {
                        self.color_changed(color);
                        Outcome::Applied
                    }
                    None => Outcome::Unchanged,
                };
            }
        };

        if announce && outcome == Outcome::Applied {
            self.notifier.notify(&command.message());
        }
        outcome
    }

    fn color_changed(&mut self, color: BrushColor) {
        self.notifier.notify(&color_message(color));
    }

    /// Give the surface and notifier back to the caller.
    pub fn end(self) -> (S, N) {
        log::info!("Session ended");
        (self.surface, self.notifier)
    }
}
