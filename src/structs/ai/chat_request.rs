use crate::structs::chat::chat_message::ChatMessage;

/// Everything a provider needs for one chat turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system_prompt: String,
    pub history: Vec<ChatMessage>,
    pub user_message: String,
}
