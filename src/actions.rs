//! Resolving click handles back into application callbacks.

use macroquad::prelude::warn;
use rustc_hash::FxHashMap;

use crate::id::ActionId;

/// Receives the action of whichever clickable element consumed a hit.
pub trait ClickHandler {
    fn on_click(&mut self, action: ActionId);
}

impl<F: FnMut(ActionId)> ClickHandler for F {
    fn on_click(&mut self, action: ActionId) {
        self(action)
    }
}

/// Maps action handles to callbacks owned by the application.
///
/// ```
/// use ply_overlay::actions::{ActionRegistry, ClickHandler};
/// use ply_overlay::id::ActionId;
///
/// let mut registry = ActionRegistry::new();
/// registry.register("respawn", || println!("respawning"));
/// assert!(registry.contains("respawn"));
/// registry.on_click(ActionId::new("respawn"));
/// ```
#[derive(Default)]
pub struct ActionRegistry<'a> {
    actions: FxHashMap<ActionId, Box<dyn FnMut() + 'a>>,
}

impl<'a> ActionRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` under `id`, replacing any previous callback.
    pub fn register(&mut self, id: impl Into<ActionId>, action: impl FnMut() + 'a) -> &mut Self {
        self.actions.insert(id.into(), Box::new(action));
        self
    }

    pub fn remove(&mut self, id: impl Into<ActionId>) -> bool {
        self.actions.remove(&id.into()).is_some()
    }

    pub fn contains(&self, id: impl Into<ActionId>) -> bool {
        self.actions.contains_key(&id.into())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl ClickHandler for ActionRegistry<'_> {
    fn on_click(&mut self, action: ActionId) {
        match self.actions.get_mut(&action) {
            Some(callback) => callback(),
            None => warn!("Clicked element has no registered action for {:?}", action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_callbacks_run() {
        let mut count = 0;
        {
            let mut registry = ActionRegistry::new();
            registry.register("chat", || count += 1);
            registry.on_click(ActionId::new("chat"));
            registry.on_click(ActionId::new("chat"));
            // Unknown ids are ignored apart from the warning.
            registry.on_click(ActionId::new("missing"));
        }
        assert_eq!(count, 2);
    }

    #[test]
    fn closures_are_handlers() {
        let mut seen = Vec::new();
        let mut handler = |id: ActionId| seen.push(id);
        handler.on_click(ActionId(7));
        assert_eq!(seen, vec![ActionId(7)]);
    }
}
