use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::structs::chat::chat_message::ChatMessage;
use crate::structs::report::report_summary::ReportSummary;

/// One visitor conversation, optionally attached to a report.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: String,
    pub report: Option<ReportSummary>,
    pub history: Vec<ChatMessage>,
    pub started_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(report: Option<ReportSummary>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            report,
            history: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// The last `limit` messages, oldest first.
    pub fn recent_history(&self, limit: usize) -> &[ChatMessage] {
        let start = self.history.len().saturating_sub(limit);
        &self.history[start..]
    }

    pub fn record_exchange(&mut self, question: &str, answer: &str) {
        self.history.push(ChatMessage::user(question));
        self.history.push(ChatMessage::assistant(answer));
    }
}
