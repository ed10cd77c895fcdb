use egui::{Context, Event, Key, Modifiers};

use crate::brush::BrushColor;
use crate::command::Dispatcher;

mod bindings;
pub use bindings::InputBinding;

/// A discrete input event the dispatcher knows how to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Escape,
    Delete,
    Enter,
    Backspace,
    /// The `[` key
    OpenBracket,
    /// The `]` key
    CloseBracket,
    /// A click on one of the palette swatches
    Swatch(BrushColor),
}

impl Trigger {
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape => Some(Self::Escape),
            Key::Delete => Some(Self::Delete),
            Key::Enter => Some(Self::Enter),
            Key::Backspace => Some(Self::Backspace),
            Key::OpenBracket => Some(Self::OpenBracket),
            Key::CloseBracket => Some(Self::CloseBracket),
            _ => None,
        }
    }

    /// The keyboard key behind this trigger, `None` for swatch clicks
    pub fn key(self) -> Option<Key> {
        match self {
            Self::Escape => Some(Key::Escape),
            Self::Delete => Some(Key::Delete),
            Self::Enter => Some(Key::Enter),
            Self::Backspace => Some(Key::Backspace),
            Self::OpenBracket => Some(Key::OpenBracket),
            Self::CloseBracket => Some(Key::CloseBracket),
            Self::Swatch(_) => None,
        }
    }
}

/// Listens for the keys in a binding table for as long as a session runs.
///
/// Created when the session starts and torn down with [`unsubscribe`],
/// after which it reports nothing.
///
/// [`unsubscribe`]: KeyboardSubscription::unsubscribe
#[derive(Debug)]
pub struct KeyboardSubscription {
    keys: Vec<Key>,
    active: bool,
}

impl KeyboardSubscription {
    pub fn subscribe(dispatcher: &Dispatcher) -> Self {
        let keys = dispatcher.bound_keys();
        log::debug!("Listening for {} keys", keys.len());
        Self { keys, active: true }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn unsubscribe(&mut self) {
        if self.active {
            log::debug!("Keyboard listener removed");
        }
        self.active = false;
        self.keys.clear();
    }

    /// This frame's presses of bound keys, in the order they arrived.
    ///
    /// Auto-repeat counts as a press. Ctrl and command shortcuts are left to
    /// the host; alt and AltGr are accepted.
    pub fn poll(&self, ctx: &Context) -> Vec<Trigger> {
        if !self.active {
            return Vec::new();
        }
        ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| self.trigger_for(event))
                .collect()
        })
    }

    fn trigger_for(&self, event: &Event) -> Option<Trigger> {
        match event {
            Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } if !is_shortcut(modifiers) && self.keys.contains(key) => {
                Trigger::from_key(*key)
            }
            _ => None,
        }
    }
}

/// Ctrl or command chords belong to the host. Ctrl together with alt is
/// AltGr, which some layouts need to type `[` and `]`.
fn is_shortcut(modifiers: &Modifiers) -> bool {
    modifiers.mac_cmd || ((modifiers.ctrl || modifiers.command) && !modifiers.alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping_round_trips() {
        for key in [
            Key::Escape,
            Key::Delete,
            Key::Enter,
            Key::Backspace,
            Key::OpenBracket,
            Key::CloseBracket,
        ] {
            let trigger = Trigger::from_key(key).unwrap();
            assert_eq!(trigger.key(), Some(key));
        }
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(Trigger::from_key(Key::A), None);
        assert_eq!(Trigger::from_key(Key::Space), None);
        assert_eq!(Trigger::Swatch(BrushColor::Red).key(), None);
    }

    #[test]
    fn test_unsubscribe() {
        let mut subscription = KeyboardSubscription::subscribe(&Dispatcher::default());
        assert!(subscription.is_active());
        subscription.unsubscribe();
        assert!(!subscription.is_active());
    }
}
