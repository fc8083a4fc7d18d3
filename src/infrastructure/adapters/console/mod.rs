//! Console adapter for development/testing

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::errors::BotError;
use crate::domain::entities::Intent;
use crate::domain::traits::{ChatClient, ClientInfo, Connector};

/// Console client for local development
pub struct ConsoleClient {
    info: ClientInfo,
}

impl ConsoleClient {
    pub fn new() -> Self {
        Self {
            info: ClientInfo {
                id: "console".to_string(),
                name: "botkit".to_string(),
                platform: "console".to_string(),
            },
        }
    }
}

impl Default for ConsoleClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for ConsoleClient {
    async fn connect(&self) -> Result<(), BotError> {
        tracing::info!("Console client online (dev mode)");
        Ok(())
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
        println!("[BOT] {}", text);
        Ok("console_msg".to_string())
    }

    fn client_info(&self) -> ClientInfo {
        self.info.clone()
    }
}

/// Builds [`ConsoleClient`] handles; the token is accepted and ignored.
pub struct ConsoleConnector;

impl Connector for ConsoleConnector {
    fn build(&self, _token: &str, intents: &[Intent]) -> Arc<dyn ChatClient> {
        tracing::debug!("Building console client with {} intents", intents.len());
        Arc::new(ConsoleClient::new())
    }
}
