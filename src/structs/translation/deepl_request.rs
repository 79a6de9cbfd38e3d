use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct DeepLRequest {
    pub text: Vec<String>,
    pub target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeepLTranslation {
    #[serde(default)]
    pub detected_source_language: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeepLResponse {
    #[serde(default)]
    pub translations: Vec<DeepLTranslation>,
}
