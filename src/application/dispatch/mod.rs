//! Trigger dispatch - Event-driven trigger handling

pub mod dispatcher;
pub mod outbox;

#[cfg(test)]
mod tests;

pub use dispatcher::TriggerDispatcher;
pub use outbox::Outbox;
