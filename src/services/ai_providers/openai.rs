use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;

use crate::enums::service_error::ServiceError;
use crate::errors::{DigibotError, DigibotResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::ai::chat_completion::ChatCompletion;
use crate::structs::ai::chat_request::ChatRequest;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response::OpenAIResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::chat_provider::ChatProvider;

#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
    rate_limiter: Arc<ApiRateLimiter>,
}

impl OpenAIProvider {
    pub fn new(api_key: String, rate_limiter: Arc<ApiRateLimiter>) -> Self {
        let defaults = AiConfig::default();
        Self {
            api_key,
            base_url: defaults.base_url,
            client: Client::new(),
            model: defaults.model,
            max_tokens: defaults.max_tokens,
            temperature: defaults.temperature,
            rate_limiter,
        }
    }

    pub fn from_config(config: &AiConfig) -> DigibotResult<Self> {
        let api_key = ConfigHelper::api_key_from_env(&config.api_key_env).ok_or_else(|| {
            DigibotError::config_error(
                "OpenAI API key is not set",
                Some("ai.api_key_env"),
                Some(&format!("export {}=<your key>", config.api_key_env)),
            )
        })?;

        let rate_limiter = Arc::new(ApiRateLimiter::new(config.rate_limit_per_minute, config.rate_limit_burst));

        Ok(Self::new(api_key, rate_limiter)
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_sampling(config.max_tokens, config.temperature))
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    fn get_openai_messages(request: &ChatRequest) -> Vec<OpenAIMessage> {
        let mut messages = Vec::with_capacity(request.history.len() + 2);

        if !request.system_prompt.is_empty() {
            messages.push(OpenAIMessage::system(request.system_prompt.clone()));
        }

        messages.extend(request.history.iter().map(OpenAIMessage::from));
        messages.push(OpenAIMessage::user(request.user_message.clone()));

        messages
    }

    fn get_request(&self, request: &ChatRequest) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: Self::get_openai_messages(request),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            stream: false,
        }
    }

    fn completion_from_response(response: OpenAIResponse) -> Result<ChatCompletion, ServiceError> {
        let tokens_used = response.usage.total_tokens;
        let text = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ServiceError::SerializationError("No content in response".to_string()))?;

        Ok(ChatCompletion { text, tokens_used })
    }
}

#[async_trait]
impl ChatProvider for OpenAIProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatCompletion, ServiceError> {
        self.rate_limiter.acquire().await;

        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(&request);
        log::debug!("📦 Request model: {} ({} messages)", request_body.model, request_body.messages.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("❌ OpenAI API Error Response: {}", error_text);
            return Err(ServiceError::from_status(status.as_u16(), error_text));
        }

        let body: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::SerializationError(e.to_string()))?;

        Self::completion_from_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::chat::chat_message::ChatMessage;

    fn provider() -> OpenAIProvider {
        OpenAIProvider::new("test-key".to_string(), Arc::new(ApiRateLimiter::new(10, 1)))
    }

    #[test]
    fn orders_system_history_then_user() {
        let request = ChatRequest {
            system_prompt: "Sen DigiBot'sun.".to_string(),
            history: vec![ChatMessage::user("Merhaba"), ChatMessage::assistant("Selam!")],
            user_message: "Skorum kaç?".to_string(),
        };

        let body = provider().get_request(&request);
        let roles: Vec<&str> = body.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
        assert_eq!(body.messages[3].content, "Skorum kaç?");
        assert_eq!(body.model, "gpt-4o-mini");
        assert!(!body.stream);
    }

    #[test]
    fn skips_empty_system_prompt() {
        let request = ChatRequest {
            system_prompt: String::new(),
            history: Vec::new(),
            user_message: "Merhaba".to_string(),
        };
        assert_eq!(provider().get_request(&request).messages.len(), 1);
    }

    #[test]
    fn reads_text_and_token_count() {
        let body: OpenAIResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Skorunuz 67."},"finish_reason":"stop"}],
                "usage":{"prompt_tokens":120,"completion_tokens":8,"total_tokens":128}}"#,
        )
        .unwrap();

        let completion = OpenAIProvider::completion_from_response(body).unwrap();
        assert_eq!(completion, ChatCompletion { text: "Skorunuz 67.".to_string(), tokens_used: 128 });
    }

    #[test]
    fn empty_choices_is_an_error() {
        let body: OpenAIResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            OpenAIProvider::completion_from_response(body),
            Err(ServiceError::SerializationError(_))
        ));
    }

    #[test]
    fn request_serializes_without_unset_fields() {
        let mut body = provider().get_request(&ChatRequest {
            system_prompt: String::new(),
            history: Vec::new(),
            user_message: "Merhaba".to_string(),
        });
        body.temperature = None;

        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["max_tokens"], 500);
    }
}
