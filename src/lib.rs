#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod device;
pub mod error;
pub mod input;
pub mod notify;
pub mod panels;
pub mod session;
pub mod stroke;
pub mod surface;

pub use app::ChalkboardApp;
pub use brush::{BrushColor, BrushConfig};
pub use canvas::Canvas;
pub use command::{Command, Dispatcher, Outcome};
pub use config::ChalkboardConfig;
pub use input::{InputBinding, KeyboardSubscription, Trigger};
pub use notify::{Notifier, Toasts};
pub use session::Session;
pub use surface::{DrawingSurface, RenderConfig};
