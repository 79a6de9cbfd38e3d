use serde::{Deserialize, Serialize};
use crate::structs::chat::chat_message::ChatMessage;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenAIMessage {
    pub role: String,
    pub content: String,
}

impl OpenAIMessage {
    pub fn system(content: String) -> Self {
        Self {
            role: "system".to_string(),
            content,
        }
    }

    pub fn user(content: String) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }
}

impl From<&ChatMessage> for OpenAIMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role.name().to_string(),
            content: message.content.clone(),
        }
    }
}
