use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ResendRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResendResponse {
    pub id: String,
}
