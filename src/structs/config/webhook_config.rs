use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "ConfigHelper::default_webhook_method")]
    pub method: String,

    #[serde(default = "ConfigHelper::default_webhook_headers")]
    pub headers: HashMap<String, String>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            method: ConfigHelper::default_webhook_method(),
            headers: ConfigHelper::default_webhook_headers(),
        }
    }
}
