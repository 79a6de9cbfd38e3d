pub mod ai_providers;
pub mod chat_service;
pub mod context_serializer;
pub mod email_service;
pub mod item_classifier;
pub mod line_matchers;
pub mod rate_limiter;
pub mod recommendation_parser;
pub mod report_converter;
pub mod report_parser;
pub mod score_mapper;
pub mod strength_extractor;
pub mod translation_service;
pub mod webhook_relay;
