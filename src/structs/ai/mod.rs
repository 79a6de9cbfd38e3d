pub mod openai;
pub mod chat_request;
pub mod chat_completion;
