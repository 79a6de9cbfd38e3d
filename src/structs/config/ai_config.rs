use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f32,

    #[serde(default = "ConfigHelper::default_openai_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_openai_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_rate_limit_per_minute")]
    pub rate_limit_per_minute: u32,

    #[serde(default = "ConfigHelper::default_rate_limit_burst")]
    pub rate_limit_burst: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            max_tokens: ConfigHelper::default_max_tokens(),
            temperature: ConfigHelper::default_temperature(),
            api_key_env: ConfigHelper::default_openai_api_key_env(),
            base_url: ConfigHelper::default_openai_base_url(),
            rate_limit_per_minute: ConfigHelper::default_rate_limit_per_minute(),
            rate_limit_burst: ConfigHelper::default_rate_limit_burst(),
        }
    }
}
