pub mod config;
pub mod ai_config;
pub mod chat_config;
pub mod email_config;
pub mod translation_config;
pub mod webhook_config;
