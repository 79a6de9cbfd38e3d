use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::chat_config::ChatConfig;
use crate::structs::config::email_config::EmailConfig;
use crate::structs::config::translation_config::TranslationConfig;
use crate::structs::config::webhook_config::WebhookConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub email: EmailConfig,

    #[serde(default)]
    pub translation: TranslationConfig,

    #[serde(default)]
    pub webhook: WebhookConfig,
}
