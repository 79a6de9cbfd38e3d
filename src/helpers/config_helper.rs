use std::collections::HashMap;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        "openai".to_string()
    }

    pub fn default_model() -> String {
        "gpt-4o-mini".to_string()
    }

    pub fn default_max_tokens() -> u32 {
        500
    }

    pub fn default_temperature() -> f32 {
        0.7
    }

    pub fn default_openai_api_key_env() -> String {
        "OPENAI_API_KEY".to_string()
    }

    pub fn default_openai_base_url() -> String {
        "https://api.openai.com/v1".to_string()
    }

    pub fn default_rate_limit_per_minute() -> u32 {
        50
    }

    pub fn default_rate_limit_burst() -> u32 {
        5
    }

    pub fn default_bot_name() -> String {
        "DigiBot".to_string()
    }

    pub fn default_max_history() -> usize {
        10
    }

    pub fn default_apology_message() -> String {
        "Üzgünüm, şu anda yanıt veremiyorum. Lütfen biraz sonra tekrar deneyin.".to_string()
    }

    pub fn default_resend_api_key_env() -> String {
        "RESEND_API_KEY".to_string()
    }

    pub fn default_resend_base_url() -> String {
        "https://api.resend.com".to_string()
    }

    pub fn default_email_from() -> String {
        "DigiBot <rapor@digibot.local>".to_string()
    }

    pub fn default_email_subject() -> String {
        "Dijital Analiz Raporunuz".to_string()
    }

    pub fn default_report_base_url() -> String {
        "https://digibot.local/rapor".to_string()
    }

    pub fn default_deepl_api_key_env() -> String {
        "DEEPL_API_KEY".to_string()
    }

    pub fn default_deepl_base_url() -> String {
        "https://api-free.deepl.com".to_string()
    }

    pub fn default_source_lang() -> String {
        "TR".to_string()
    }

    pub fn default_webhook_method() -> String {
        "POST".to_string()
    }

    pub fn default_webhook_headers() -> HashMap<String, String> {
        HashMap::from([("Content-Type".to_string(), "application/json".to_string())])
    }

    /// Reads an API key from the environment variable named by the config.
    pub fn api_key_from_env(env_name: &str) -> Option<String> {
        std::env::var(env_name).ok().filter(|key| !key.trim().is_empty())
    }
}
