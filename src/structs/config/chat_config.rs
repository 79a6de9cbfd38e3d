use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    #[serde(default = "ConfigHelper::default_bot_name")]
    pub bot_name: String,

    /// Number of previous messages sent along with each question.
    #[serde(default = "ConfigHelper::default_max_history")]
    pub max_history: usize,

    #[serde(default = "ConfigHelper::default_apology_message")]
    pub apology_message: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: ConfigHelper::default_bot_name(),
            max_history: ConfigHelper::default_max_history(),
            apology_message: ConfigHelper::default_apology_message(),
        }
    }
}
