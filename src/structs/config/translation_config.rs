use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TranslationConfig {
    #[serde(default = "ConfigHelper::default_deepl_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_deepl_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_source_lang")]
    pub source_lang: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_key_env: ConfigHelper::default_deepl_api_key_env(),
            base_url: ConfigHelper::default_deepl_base_url(),
            source_lang: ConfigHelper::default_source_lang(),
        }
    }
}
