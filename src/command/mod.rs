mod dispatcher;

use crate::brush::BrushColor;

pub use dispatcher::Dispatcher;

/// A discrete action resolved from one input trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Erase every stroke on the canvas
    Clear,
    /// Remove the most recent stroke
    Undo,
    IncreaseBrush,
    /// Shrink the brush, unless it is already at its smallest size
    DecreaseBrush,
    SetColor(BrushColor),
}

impl Command {
    /// Text shown to the user once the command has been applied
    pub fn message(&self) -> String {
        match self {
            Command::Clear => "Cleared canvas".to_owned(),
            Command::Undo => "Undid last action".to_owned(),
            Command::IncreaseBrush => "Increased brush size".to_owned(),
            Command::DecreaseBrush => "Decreased brush size".to_owned(),
            Command::SetColor(color) => color_message(*color),
        }
    }
}

pub fn color_message(color: BrushColor) -> String {
    format!("Brush Color set to {color}")
}

/// Whether applying a command changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// A guard failed or the value was already current; nothing was
    /// forwarded and nothing was announced.
    Unchanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Command::Clear.message(), "Cleared canvas");
        assert_eq!(Command::Undo.message(), "Undid last action");
        assert_eq!(Command::IncreaseBrush.message(), "Increased brush size");
        assert_eq!(Command::DecreaseBrush.message(), "Decreased brush size");
        assert_eq!(
            Command::SetColor(BrushColor::Blue).message(),
            "Brush Color set to blue"
        );
    }
}
