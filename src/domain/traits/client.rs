use async_trait::async_trait;
use std::sync::Arc;

use crate::application::errors::BotError;
use crate::domain::entities::Intent;

/// ChatClient trait - abstraction for the platform client library
///
/// Gateway events (message receipt, ready state) surface on the platform
/// library's own event surface, not through this trait.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Begin the connection attempt.
    async fn connect(&self) -> Result<(), BotError>;

    /// Send a message to a chat.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError>;

    /// Get client info
    fn client_info(&self) -> ClientInfo;
}

/// Builds a platform client from validated connection parameters.
pub trait Connector: Send + Sync {
    fn build(&self, token: &str, intents: &[Intent]) -> Arc<dyn ChatClient>;
}

/// Client information
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub id: String,
    pub name: String,
    pub platform: String,
}
