//! Bot assembly - wires validated options into a client handle

use std::sync::Arc;

use crate::application::errors::BotError;
use crate::domain::traits::{ChatClient, Connector};
use crate::infrastructure::commands::{CommandLoader, CommandRegistry};
use crate::infrastructure::config::Options;
use crate::infrastructure::logging::Logger;

/// An assembled bot: one client handle, one optional logger, one command
/// registry.
///
/// Construction is synchronous; it builds the platform client, starts the
/// connection attempt in the background, and attaches the logger. Command
/// discovery runs in [`Bot::initialize`], which must be awaited before the
/// registry is meaningful.
pub struct Bot {
    client: Arc<dyn ChatClient>,
    logger: Option<Logger>,
    loader: CommandLoader,
    groups: Vec<String>,
    commands: CommandRegistry,
}

impl Bot {
    /// Build the client from the token and intents and spawn the connection
    /// attempt. Its outcome surfaces on the client's own event surface.
    pub fn new(options: &Options, connector: &dyn Connector) -> Self {
        let client = connector.build(options.token(), options.intents());

        let connecting = Arc::clone(&client);
        tokio::spawn(async move {
            if let Err(e) = connecting.connect().await {
                tracing::error!("Connection attempt failed: {}", e);
            }
        });

        let mut logger = options.logger().map(Logger::new);
        if let Some(logger) = logger.as_mut() {
            logger.info("logger attached, assembling bot");
        }

        Self {
            client,
            logger,
            loader: CommandLoader::new(options.commands_path()).with_policy(options.load_policy()),
            groups: Vec::new(),
            commands: CommandRegistry::new(),
        }
    }

    /// Discover command groups and load their modules.
    ///
    /// Must complete before [`Bot::commands`] reflects the directory tree.
    pub async fn initialize(&mut self) -> Result<(), BotError> {
        self.groups = self.loader.discover_groups().await?;
        self.commands = self.loader.load_commands(&self.groups).await?;

        if let Some(logger) = self.logger.as_mut() {
            logger.info(&format!(
                "loaded {} commands from {} groups",
                self.commands.len(),
                self.groups.len()
            ));
        }
        Ok(())
    }

    pub fn client(&self) -> &Arc<dyn ChatClient> {
        &self.client
    }

    /// None when no logger options were supplied; callers treat logging as a
    /// no-op in that case.
    pub fn logger_mut(&mut self) -> Option<&mut Logger> {
        self.logger.as_mut()
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }
}
