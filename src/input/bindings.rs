use crate::brush::BrushColor;
use crate::command::Command;

use super::Trigger;

/// Maps one trigger to the command it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBinding {
    pub trigger: Trigger,
    pub command: Command,
    /// Whether the command's message is shown once it applies. Color changes
    /// are announced by the session whenever the color really changes.
    pub announce: bool,
}

impl InputBinding {
    pub fn new(trigger: Trigger, command: Command) -> Self {
        Self {
            trigger,
            command,
            announce: true,
        }
    }

    pub fn silent(trigger: Trigger, command: Command) -> Self {
        Self {
            announce: false,
            ..Self::new(trigger, command)
        }
    }

    /// The chalkboard's key bindings plus one binding per palette swatch
    pub fn defaults() -> Vec<InputBinding> {
        let mut bindings = vec![
            Self::new(Trigger::Escape, Command::Clear),
            Self::new(Trigger::Delete, Command::Clear),
            Self::new(Trigger::Enter, Command::Undo),
            // TODO: decide whether Backspace should announce like Enter does
            Self::silent(Trigger::Backspace, Command::Undo),
            Self::new(Trigger::OpenBracket, Command::DecreaseBrush),
            Self::new(Trigger::CloseBracket, Command::IncreaseBrush),
        ];
        bindings.extend(
            BrushColor::ALL
                .into_iter()
                .map(|color| Self::new(Trigger::Swatch(color), Command::SetColor(color))),
        );
        bindings
    }
}
