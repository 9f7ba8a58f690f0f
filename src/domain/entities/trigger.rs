use std::collections::HashMap;

use crate::application::errors::TriggerError;

/// Trigger handler function type
///
/// Handlers take no arguments; whatever they need (reply outbox, shared
/// state) is captured when the closure is built. A failing handler stops
/// the dispatch it runs in.
pub type TriggerHandler = Box<dyn FnMut() -> Result<(), TriggerError> + Send>;

/// Registry mapping exact-match trigger strings to their handlers
///
/// Each trigger owns an ordered list of handlers; registration order is
/// invocation order. Registration only ever appends, so a present key
/// always maps to a non-empty list.
#[derive(Default)]
pub struct TriggerRegistry {
    handlers: HashMap<String, Vec<TriggerHandler>>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler to the trigger's list, creating the list if absent.
    /// No deduplication: registering the same handler twice makes it run
    /// twice per dispatch.
    pub fn register<F>(&mut self, trigger: impl Into<String>, handler: F)
    where
        F: FnMut() -> Result<(), TriggerError> + Send + 'static,
    {
        self.handlers
            .entry(trigger.into())
            .or_default()
            .push(Box::new(handler));
    }

    pub fn contains(&self, trigger: &str) -> bool {
        self.handlers.contains_key(trigger)
    }

    pub fn handlers_mut(&mut self, trigger: &str) -> Option<&mut Vec<TriggerHandler>> {
        self.handlers.get_mut(trigger)
    }

    pub fn handler_count(&self, trigger: &str) -> usize {
        self.handlers.get(trigger).map_or(0, Vec::len)
    }

    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
