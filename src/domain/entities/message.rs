use chrono::{DateTime, Utc};

/// Message content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Command { name: String, args: Vec<String> },
    Empty,
}

impl Content {
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_command(&self) -> bool {
        matches!(self, Content::Command { .. })
    }
}

/// An incoming or outgoing message handed to command execution.
#[derive(Debug, Clone)]
pub struct Message {
    pub chat_id: String,
    pub sender: Option<String>,
    pub content: Content,
    pub timestamp: DateTime<Utc>,
    pub platform: String,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, content: Content) -> Self {
        Self {
            chat_id: chat_id.into(),
            sender: None,
            content,
            timestamp: Utc::now(),
            platform: "unknown".to_string(),
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_fill_in_sender_and_platform() {
        let message = Message::new("chat-1", Content::Text("hi".into()))
            .with_sender("user-9")
            .with_platform("console");

        assert_eq!(message.chat_id, "chat-1");
        assert_eq!(message.sender.as_deref(), Some("user-9"));
        assert_eq!(message.platform, "console");
        assert_eq!(message.content.text(), Some("hi"));
    }

    #[test]
    fn command_content_is_recognized() {
        let content = Content::Command {
            name: "ping".into(),
            args: vec![],
        };
        assert!(content.is_command());
        assert_eq!(content.text(), None);
    }
}
