use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub message: String,
    pub tokens_used: u32,
    /// False when the provider failed and the apology message was substituted.
    pub answered: bool,
}
