use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub content_key: String,
    pub target_lang: String,
    pub translated_text: String,
    /// SHA-256 of the source text; unchanged hash means the stored
    /// translation is still current.
    pub content_hash: String,
}
