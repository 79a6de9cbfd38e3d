pub mod category_key;
pub mod chat_role;
pub mod commands;
pub mod effort;
pub mod item_status;
pub mod line_kind;
pub mod output_format;
pub mod priority;
pub mod service_error;
