use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::application::errors::ValidationError;

/// A gateway permission intent, gating which event types the client receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Intent {
    Guilds,
    GuildMembers,
    GuildModeration,
    GuildEmojisAndStickers,
    GuildIntegrations,
    GuildWebhooks,
    GuildInvites,
    GuildVoiceStates,
    GuildPresences,
    GuildMessages,
    GuildMessageReactions,
    GuildMessageTyping,
    DirectMessages,
    DirectMessageReactions,
    DirectMessageTyping,
    MessageContent,
    GuildScheduledEvents,
    AutoModerationConfiguration,
    AutoModerationExecution,
}

impl Intent {
    /// Starter set requested when none are configured explicitly.
    pub fn default_set() -> [Intent; 4] {
        [
            Intent::Guilds,
            Intent::GuildMessages,
            Intent::DirectMessages,
            Intent::MessageContent,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Guilds => "Guilds",
            Intent::GuildMembers => "GuildMembers",
            Intent::GuildModeration => "GuildModeration",
            Intent::GuildEmojisAndStickers => "GuildEmojisAndStickers",
            Intent::GuildIntegrations => "GuildIntegrations",
            Intent::GuildWebhooks => "GuildWebhooks",
            Intent::GuildInvites => "GuildInvites",
            Intent::GuildVoiceStates => "GuildVoiceStates",
            Intent::GuildPresences => "GuildPresences",
            Intent::GuildMessages => "GuildMessages",
            Intent::GuildMessageReactions => "GuildMessageReactions",
            Intent::GuildMessageTyping => "GuildMessageTyping",
            Intent::DirectMessages => "DirectMessages",
            Intent::DirectMessageReactions => "DirectMessageReactions",
            Intent::DirectMessageTyping => "DirectMessageTyping",
            Intent::MessageContent => "MessageContent",
            Intent::GuildScheduledEvents => "GuildScheduledEvents",
            Intent::AutoModerationConfiguration => "AutoModerationConfiguration",
            Intent::AutoModerationExecution => "AutoModerationExecution",
        }
    }
}

impl FromStr for Intent {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Guilds" => Ok(Intent::Guilds),
            "GuildMembers" => Ok(Intent::GuildMembers),
            "GuildModeration" => Ok(Intent::GuildModeration),
            "GuildEmojisAndStickers" => Ok(Intent::GuildEmojisAndStickers),
            "GuildIntegrations" => Ok(Intent::GuildIntegrations),
            "GuildWebhooks" => Ok(Intent::GuildWebhooks),
            "GuildInvites" => Ok(Intent::GuildInvites),
            "GuildVoiceStates" => Ok(Intent::GuildVoiceStates),
            "GuildPresences" => Ok(Intent::GuildPresences),
            "GuildMessages" => Ok(Intent::GuildMessages),
            "GuildMessageReactions" => Ok(Intent::GuildMessageReactions),
            "GuildMessageTyping" => Ok(Intent::GuildMessageTyping),
            "DirectMessages" => Ok(Intent::DirectMessages),
            "DirectMessageReactions" => Ok(Intent::DirectMessageReactions),
            "DirectMessageTyping" => Ok(Intent::DirectMessageTyping),
            "MessageContent" => Ok(Intent::MessageContent),
            "GuildScheduledEvents" => Ok(Intent::GuildScheduledEvents),
            "AutoModerationConfiguration" => Ok(Intent::AutoModerationConfiguration),
            "AutoModerationExecution" => Ok(Intent::AutoModerationExecution),
            other => Err(ValidationError::UnknownIntent(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_intents() {
        assert_eq!("Guilds".parse::<Intent>().unwrap(), Intent::Guilds);
        assert_eq!(
            "MessageContent".parse::<Intent>().unwrap(),
            Intent::MessageContent
        );
    }

    #[test]
    fn rejects_unknown_intent() {
        let err = "GuildKaraoke".parse::<Intent>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownIntent("GuildKaraoke".into()));
    }

    #[test]
    fn round_trips_through_as_str() {
        for intent in Intent::default_set() {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), intent);
        }
    }
}
