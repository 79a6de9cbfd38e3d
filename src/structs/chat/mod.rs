pub mod chat_message;
pub mod chat_reply;
pub mod chat_session;
