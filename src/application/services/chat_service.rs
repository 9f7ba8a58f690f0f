use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::application::dispatch::{Outbox, TriggerDispatcher};
use crate::application::errors::{BotError, TriggerError};
use crate::domain::entities::Message;
use crate::domain::traits::Chat;

/// Mutable bot state shared with the age handlers
struct BotState {
    birth_time: DateTime<Utc>,
    first_age_request: bool,
}

fn lock_state(state: &Arc<Mutex<BotState>>) -> Result<MutexGuard<'_, BotState>, TriggerError> {
    state
        .lock()
        .map_err(|_| TriggerError::ExecutionFailed("bot state lock poisoned".to_string()))
}

/// The assembled chat bot: a trigger dispatcher wired with the canned
/// conversation handlers.
///
/// Construction records the birth timestamp and registers, in order:
/// `hi` (greeting), `bye` (farewell), and two handlers for `age?`. The
/// first age handler answers in whole seconds but only until the first
/// request has been served; the second answers with a microsecond
/// component on every request after the first, and is the only place the
/// first-request flag is cleared. Net effect: the first `age?` gets the
/// coarse answer, every later one the detailed answer, never both.
pub struct ChatBot {
    dispatcher: TriggerDispatcher,
    state: Arc<Mutex<BotState>>,
}

impl ChatBot {
    pub fn new(outbox: Outbox) -> Self {
        let state = Arc::new(Mutex::new(BotState {
            birth_time: Utc::now(),
            first_age_request: true,
        }));
        let mut dispatcher = TriggerDispatcher::new(outbox.clone());

        let out = outbox.clone();
        dispatcher.register("hi", move || {
            out.say("Hello!");
            Ok(())
        });

        let out = outbox.clone();
        dispatcher.register("bye", move || {
            out.say("Nice chatting with you!");
            Ok(())
        });

        let out = outbox.clone();
        let age_state = Arc::clone(&state);
        dispatcher.register("age?", move || {
            let st = lock_state(&age_state)?;
            if st.first_age_request {
                let age = Utc::now() - st.birth_time;
                out.say(format!("I am {} seconds old.", age.num_seconds()));
            }
            Ok(())
        });

        let age_state = Arc::clone(&state);
        dispatcher.register("age?", move || {
            let mut st = lock_state(&age_state)?;
            if !st.first_age_request {
                let age = Utc::now() - st.birth_time;
                outbox.say(format!(
                    "Technically, I'm {} seconds and {} microseconds old.",
                    age.num_seconds(),
                    age.subsec_nanos() / 1_000
                ));
            }
            st.first_age_request = false;
            Ok(())
        });

        Self { dispatcher, state }
    }

    /// Present one trigger to the bot
    pub fn handle(&mut self, trigger: &str) -> Result<(), TriggerError> {
        self.dispatcher.dispatch(trigger)
    }

    /// Register an additional handler on top of the canned wiring
    pub fn register<F>(&mut self, trigger: impl Into<String>, handler: F)
    where
        F: FnMut() -> Result<(), TriggerError> + Send + 'static,
    {
        self.dispatcher.register(trigger, handler);
    }

    /// Triggers the bot currently answers to
    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.dispatcher.registry().triggers()
    }

    /// Whether the first age request is still pending
    pub fn first_age_request(&self) -> bool {
        self.state
            .lock()
            .map(|st| st.first_age_request)
            .unwrap_or(false)
    }
}

/// Service gluing the bot core to a chat surface
pub struct ChatService<C: Chat> {
    bot: ChatBot,
    chat: C,
    replies: mpsc::UnboundedReceiver<String>,
}

impl<C: Chat> ChatService<C> {
    pub fn new(chat: C) -> Self {
        let (outbox, replies) = Outbox::channel();
        Self {
            bot: ChatBot::new(outbox),
            chat,
            replies,
        }
    }

    pub fn chat(&self) -> &C {
        &self.chat
    }

    pub fn bot(&self) -> &ChatBot {
        &self.bot
    }

    pub fn bot_mut(&mut self) -> &mut ChatBot {
        &mut self.bot
    }

    /// Process an incoming message and deliver any queued replies
    pub async fn process(&mut self, message: Message) -> Result<(), BotError> {
        tracing::info!("Processing {} message from {}: {:?}", message.platform, message.chat_id, message.text);
        tracing::debug!("Message {} received at {}", message.id, message.timestamp);

        self.bot.handle(message.trigger())?;
        self.flush(&message.chat_id).await
    }

    /// Deliver queued reply lines to the chat surface, in queue order
    async fn flush(&mut self, chat_id: &str) -> Result<(), BotError> {
        while let Ok(line) = self.replies.try_recv() {
            self.chat.send_message(chat_id, &line).await?;
        }
        Ok(())
    }
}
