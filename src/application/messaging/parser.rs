//! Message parser - Parses raw messages into structured messages

use crate::domain::entities::{Content, InboundMessage};

/// Parses incoming text into `InboundMessage` objects
pub struct MessageParser {
    command_prefix: String,
}

impl MessageParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            command_prefix: prefix.into(),
        }
    }

    fn is_command(&self, text: &str) -> bool {
        text.starts_with('/') || (!self.command_prefix.is_empty() && text.starts_with(&self.command_prefix))
    }

    /// Parse a text message
    pub fn parse(&self, chat_id: impl Into<String>, sender_id: impl Into<String>, text: impl Into<String>) -> InboundMessage {
        let text = text.into();
        let trimmed = text.trim();

        let message = InboundMessage::new(chat_id, sender_id, text.clone());
        if self.is_command(trimmed) {
            let content = self.parse_command(trimmed);
            return message.with_content(content);
        }

        message.with_content(Content::Text(trimmed.to_string()))
    }

    /// Parse a command message
    fn parse_command(&self, text: &str) -> Content {
        // Remove the command prefix (either / or custom prefix)
        let cmd_text = if let Some(rest) = text.strip_prefix('/') {
            rest
        } else {
            text.strip_prefix(self.command_prefix.as_str()).unwrap_or(text)
        };

        let mut parts = cmd_text.split_whitespace();
        let head = parts.next().unwrap_or("");
        // "/start@my_bot" in group chats
        let name = head.split('@').next().unwrap_or("").to_lowercase();
        let args = parts.map(|s| s.to_string()).collect();

        Content::Command { name, args }
    }
}
