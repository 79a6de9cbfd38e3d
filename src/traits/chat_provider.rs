use async_trait::async_trait;
use crate::enums::service_error::ServiceError;
use crate::structs::ai::chat_completion::ChatCompletion;
use crate::structs::ai::chat_request::ChatRequest;

#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn chat(&self, request: ChatRequest) -> Result<ChatCompletion, ServiceError>;
}
