use crate::input::{InputBinding, Trigger};

/// Resolves input triggers to commands through a fixed binding table.
///
/// Holds no state between triggers; the table is built once when the
/// session starts and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    bindings: Vec<InputBinding>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(InputBinding::defaults())
    }
}

impl Dispatcher {
    pub fn new(bindings: Vec<InputBinding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[InputBinding] {
        &self.bindings
    }

    /// The binding for `trigger`, or `None` when the trigger is unbound.
    pub fn resolve(&self, trigger: Trigger) -> Option<&InputBinding> {
        self.bindings.iter().find(|binding| binding.trigger == trigger)
    }

    /// Every keyboard key that appears in the table
    pub fn bound_keys(&self) -> Vec<egui::Key> {
        let mut keys = Vec::new();
        for key in self.bindings.iter().filter_map(|binding| binding.trigger.key()) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}
