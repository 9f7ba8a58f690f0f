use async_trait::async_trait;
use crate::application::errors::BotError;

/// Chat trait - abstraction for chat surface adapters
#[async_trait]
pub trait Chat: Send + Sync {
    /// Start the chat surface
    async fn start(&self) -> Result<(), BotError>;

    /// Deliver a reply line to a chat
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError>;

    /// Get surface info
    fn info(&self) -> ChatInfo;
}

/// Chat surface information
#[derive(Debug, Clone)]
pub struct ChatInfo {
    pub id: String,
    pub name: String,
}
