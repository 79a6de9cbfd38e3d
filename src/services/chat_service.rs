use std::sync::Arc;
use crate::errors::{DigibotError, DigibotResult};
use crate::prompts::digibot_system_prompt::{BOT_NAME_PLACEHOLDER, DIGIBOT_SYSTEM_PROMPT, REPORT_CONTEXT_HEADER};
use crate::services::context_serializer::generate_report_context;
use crate::structs::ai::chat_request::ChatRequest;
use crate::structs::chat::chat_reply::ChatReply;
use crate::structs::chat::chat_session::ChatSession;
use crate::structs::config::chat_config::ChatConfig;
use crate::structs::report::report_summary::ReportSummary;
use crate::traits::chat_provider::ChatProvider;

/// DigiBot conversation handler. Provider failures never reach the visitor:
/// they are logged and replaced with the configured apology.
pub struct ChatService {
    provider: Arc<dyn ChatProvider>,
    config: ChatConfig,
}

impl ChatService {
    pub fn new(provider: Arc<dyn ChatProvider>, config: ChatConfig) -> Self {
        Self { provider, config }
    }

    pub fn build_system_prompt(&self, report: Option<&ReportSummary>) -> String {
        let mut prompt = DIGIBOT_SYSTEM_PROMPT
            .replace(BOT_NAME_PLACEHOLDER, &self.config.bot_name)
            .trim()
            .to_string();

        if let Some(report) = report {
            prompt.push_str("\n\n");
            prompt.push_str(REPORT_CONTEXT_HEADER);
            prompt.push('\n');
            prompt.push_str(&generate_report_context(report));
        }

        prompt
    }

    pub async fn ask(&self, session: &mut ChatSession, message: &str) -> DigibotResult<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(DigibotError::user_input_error(message, "chat message must not be empty"));
        }

        let request = ChatRequest {
            system_prompt: self.build_system_prompt(session.report.as_ref()),
            history: session.recent_history(self.config.max_history).to_vec(),
            user_message: message.to_string(),
        };

        match self.provider.chat(request).await {
            Ok(completion) => {
                log::info!("🤖 Session {} answered ({} tokens)", session.id, completion.tokens_used);
                session.record_exchange(message, &completion.text);
                Ok(ChatReply {
                    message: completion.text,
                    tokens_used: completion.tokens_used,
                    answered: true,
                })
            }
            Err(e) => {
                log::error!("❌ Chat provider failed for session {}: {}", session.id, e);
                Ok(ChatReply {
                    message: self.config.apology_message.clone(),
                    tokens_used: 0,
                    answered: false,
                })
            }
        }
    }
}
