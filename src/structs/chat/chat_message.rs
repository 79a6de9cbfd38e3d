use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::chat_role::ChatRole;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content.into())
    }

    fn new(role: ChatRole, content: String) -> Self {
        Self {
            role,
            content,
            created_at: Utc::now(),
        }
    }
}
