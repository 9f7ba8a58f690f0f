//! Console adapter for development/testing

use async_trait::async_trait;
use crate::application::errors::BotError;
use crate::domain::traits::{Chat, ChatInfo};

/// Console chat adapter for local development
pub struct ConsoleAdapter {
    info: ChatInfo,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: ChatInfo {
                id: "console".to_string(),
                name: name.into(),
            },
        }
    }

    /// Read one trimmed line from stdin; None on EOF or read error
    pub async fn read_line(&self, prompt: &str) -> Option<String> {
        use std::io::Write;
        print!("{}", prompt);
        let _ = std::io::stdout().flush();

        let mut input = String::new();
        match std::io::stdin().read_line(&mut input) {
            Ok(0) => None,
            Ok(_) => Some(input.trim().to_string()),
            Err(_) => None,
        }
    }
}

#[async_trait]
impl Chat for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console chat (dev mode)");
        Ok(())
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
        println!("{}", text);
        Ok("console_msg".to_string())
    }

    fn info(&self) -> ChatInfo {
        self.info.clone()
    }
}
