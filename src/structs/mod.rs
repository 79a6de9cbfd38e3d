pub mod ai;
pub mod chat;
pub mod cli;
pub mod config;
pub mod email;
pub mod report;
pub mod translation;
