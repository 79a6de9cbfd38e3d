use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{DigibotError, DigibotResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# DigiBot configuration

# Chat completion provider
[ai]
provider = "openai"
model = "gpt-4o-mini"
max_tokens = 500
temperature = 0.7
api_key_env = "OPENAI_API_KEY"
base_url = "https://api.openai.com/v1"

# Rate limiting for provider calls
rate_limit_per_minute = 50
rate_limit_burst = 5

[chat]
bot_name = "DigiBot"
# Previous messages sent with each question
max_history = 10
apology_message = "Üzgünüm, şu anda yanıt veremiyorum. Lütfen biraz sonra tekrar deneyin."

# Report delivery (Resend)
[email]
api_key_env = "RESEND_API_KEY"
from = "DigiBot <rapor@digibot.local>"
subject = "Dijital Analiz Raporunuz"
report_base_url = "https://digibot.local/rapor"

# Content translation (DeepL)
[translation]
api_key_env = "DEEPL_API_KEY"
base_url = "https://api-free.deepl.com"
source_lang = "TR"

# Lead relay
[webhook]
# url = "https://hooks.example.com/leads"
method = "POST"

[webhook.headers]
Content-Type = "application/json"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn load() -> DigibotResult<Config> {
        let path = Self::config_path();

        if path.exists() {
            return Self::load_from(&path);
        }

        log::debug!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> DigibotResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| DigibotError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> DigibotResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> DigibotResult<()> {
        if path.exists() {
            return Err(DigibotError::config_error(
                "Configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", path.display())),
            ));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| DigibotError::file_error(&dir.display().to_string(), "create_dir", &e.to_string()))?;
        }
        fs::write(path, SAMPLE_CONFIG).map_err(|e| DigibotError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.ai.provider != "openai" {
            errors.push(format!("Unsupported AI provider: {}", config.ai.provider));
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be between 0.0 and 2.0, got {}", config.ai.temperature));
        }

        if config.ai.max_tokens == 0 {
            errors.push("ai.max_tokens must be greater than 0".to_string());
        }

        if config.ai.rate_limit_per_minute == 0 || config.ai.rate_limit_burst == 0 {
            errors.push("ai rate limits must be greater than 0".to_string());
        }

        for (name, url) in [
            ("ai.base_url", &config.ai.base_url),
            ("email.base_url", &config.email.base_url),
            ("translation.base_url", &config.translation.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push(format!("{} is not an http(s) URL: {}", name, url));
            }
        }

        if let Some(url) = &config.webhook.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push(format!("webhook.url is not an http(s) URL: {}", url));
            }
        }

        if !["GET", "POST", "PUT", "PATCH"].contains(&config.webhook.method.to_uppercase().as_str()) {
            errors.push(format!("Unsupported webhook method: {}", config.webhook.method));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sample_config_round_trips_to_defaults() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn writes_and_loads_sample() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("digibot").join("config.toml");

        ConfigManager::write_sample_config(&path).unwrap();
        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.chat.bot_name, "DigiBot");

        assert!(matches!(
            ConfigManager::write_sample_config(&path),
            Err(DigibotError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[chat]\nmax_history = 4\n").unwrap();
        assert_eq!(config.chat.max_history, 4);
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.webhook.url, None);
    }

    #[test]
    fn reports_every_problem() {
        let mut config = Config::default();
        config.ai.temperature = 3.5;
        config.ai.base_url = "ftp://nope".to_string();
        config.webhook.method = "DELETE".to_string();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ai\nmodel = 1").unwrap();

        assert!(matches!(ConfigManager::load_from(&path), Err(DigibotError::ParseError { .. })));
    }
}
