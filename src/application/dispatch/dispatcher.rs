//! Trigger dispatcher - Routes exact-match triggers to their handlers

use crate::application::errors::TriggerError;
use crate::domain::entities::TriggerRegistry;
use super::outbox::Outbox;

/// Dispatcher owning the trigger registry and the reply path
pub struct TriggerDispatcher {
    registry: TriggerRegistry,
    outbox: Outbox,
}

impl TriggerDispatcher {
    pub fn new(outbox: Outbox) -> Self {
        Self {
            registry: TriggerRegistry::new(),
            outbox,
        }
    }

    /// Register a handler for a trigger
    pub fn register<F>(&mut self, trigger: impl Into<String>, handler: F)
    where
        F: FnMut() -> Result<(), TriggerError> + Send + 'static,
    {
        self.registry.register(trigger, handler);
    }

    /// Present a trigger: run all its handlers in registration order, each
    /// to completion before the next, on the calling thread. An unknown
    /// trigger queues a not-understood notice and succeeds.
    ///
    /// A failing handler stops the run; handlers registered after it do
    /// not fire and the error surfaces to the caller.
    pub fn dispatch(&mut self, trigger: &str) -> Result<(), TriggerError> {
        match self.registry.handlers_mut(trigger) {
            Some(handlers) => {
                tracing::debug!("Dispatching '{}' to {} handler(s)", trigger, handlers.len());
                for handler in handlers.iter_mut() {
                    handler()?;
                }
                Ok(())
            }
            None => {
                tracing::debug!("Unrecognized trigger: '{}'", trigger);
                self.outbox
                    .say(format!("sorry, I don't understand {}", trigger));
                Ok(())
            }
        }
    }

    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }
}
