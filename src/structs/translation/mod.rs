pub mod deepl_request;
pub mod translation_result;
