use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;
use crate::errors::{DigibotError, DigibotResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::services::chat_service::ChatService;
use crate::services::context_serializer::generate_report_context;
use crate::services::email_service::EmailService;
use crate::services::report_converter::{convert_to_analysis_result, convert_to_report_data};
use crate::services::report_parser::parse_report_text;
use crate::services::translation_service::TranslationService;
use crate::services::webhook_relay::WebhookRelay;
use crate::structs::chat::chat_session::ChatSession;
use crate::structs::config::config::Config;
use crate::structs::email::report_email::ReportEmail;
use crate::structs::report::parsed_report::ParsedReport;
use crate::structs::report::report_summary::ReportSummary;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> DigibotResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Parse { file, format } => self.parse_command(&file, format),
            Commands::Chat { file, message } => self.chat_command(&file, &message).await,
            Commands::SendReport { to, report_id, name, message } => {
                self.send_report_command(ReportEmail { to, name, message, report_id }).await
            }
            Commands::Translate { target, key, text } => self.translate_command(&target, &key, text).await,
            Commands::Relay { payload } => self.relay_command(&payload).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> DigibotResult<()> {
        log::info!("🚀 Initializing DigiBot configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔧 Run 'digibot validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> DigibotResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = Self::load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                Ok(())
            }
            Err(problems) => {
                for problem in &problems {
                    log::error!("   • {}", problem);
                }
                Err(DigibotError::config_error(
                    &format!("{} configuration problem(s) found", problems.len()),
                    None,
                    Some(&format!("Edit {}", ConfigManager::config_path().display())),
                ))
            }
        }
    }

    fn parse_command(&self, file: &Path, format: OutputFormat) -> DigibotResult<()> {
        let parsed = Self::read_report(file)?;

        let output = match format {
            OutputFormat::Json => serde_json::to_string_pretty(&parsed)?,
            OutputFormat::Analysis => serde_json::to_string_pretty(&convert_to_analysis_result(&parsed))?,
            OutputFormat::Report => serde_json::to_string_pretty(&convert_to_report_data(&parsed))?,
            OutputFormat::Context => {
                let summary = ReportSummary::from(&convert_to_analysis_result(&parsed));
                generate_report_context(&summary)
            }
        };

        println!("{}", output);
        Ok(())
    }

    async fn chat_command(&self, file: &Path, message: &str) -> DigibotResult<()> {
        let config = Self::load_config()?;
        let parsed = Self::read_report(file)?;
        let summary = ReportSummary::from(&convert_to_analysis_result(&parsed));

        let provider = OpenAIProvider::from_config(&config.ai)?;
        let service = ChatService::new(Arc::new(provider), config.chat.clone());
        let mut session = ChatSession::new(Some(summary));

        let mut spinner = AnimatedLogger::new(format!("💬 {} düşünüyor", config.chat.bot_name));
        spinner.start();
        let reply = match service.ask(&mut session, message).await {
            Ok(reply) => reply,
            Err(e) => {
                spinner.error("Soru gönderilemedi").await;
                return Err(e);
            }
        };

        if reply.answered {
            spinner.stop(&format!("{} token kullanıldı", reply.tokens_used)).await;
        } else {
            spinner.error("Sağlayıcı yanıt vermedi").await;
        }

        println!("{}", reply.message);
        Ok(())
    }

    async fn send_report_command(&self, email: ReportEmail) -> DigibotResult<()> {
        let config = Self::load_config()?;
        let api_key = Self::api_key(&config.email.api_key_env, "email.api_key_env")?;
        let service = EmailService::new(api_key, config.email.clone());

        log::info!("📧 Sending report {} to {}", email.report_id, email.to);
        let id = service
            .send_report(&email)
            .await
            .map_err(|e| DigibotError::service_error("Resend", &e))?;

        log::info!("✅ Email queued with id {}", id);
        println!("{}", id);
        Ok(())
    }

    async fn translate_command(&self, target: &str, key: &str, texts: Vec<String>) -> DigibotResult<()> {
        let config = Self::load_config()?;
        let api_key = Self::api_key(&config.translation.api_key_env, "translation.api_key_env")?;
        let service = TranslationService::new(api_key, config.translation.clone());

        let entries: Vec<(String, String)> = if texts.len() == 1 {
            texts.into_iter().map(|text| (key.to_string(), text)).collect()
        } else {
            texts
                .into_iter()
                .enumerate()
                .map(|(index, text)| (format!("{}.{}", key, index + 1), text))
                .collect()
        };

        log::info!("🌐 Translating {} entries to {}", entries.len(), target);

        let mut failures = 0;
        for result in service.translate_many(&entries, target).await {
            match result {
                Ok(translation) => println!("{}", serde_json::to_string(&translation)?),
                Err(e) => {
                    failures += 1;
                    log::error!("❌ {}", e);
                }
            }
        }

        if failures > 0 {
            return Err(DigibotError::ServiceError {
                service: "DeepL".to_string(),
                reason: format!("{} of {} translations failed", failures, entries.len()),
            });
        }

        Ok(())
    }

    async fn relay_command(&self, payload: &str) -> DigibotResult<()> {
        let config = Self::load_config()?;
        let payload = Self::relay_payload(payload)?;
        let relay = WebhookRelay::new(config.webhook.clone());

        let status = relay
            .relay(&payload)
            .await
            .map_err(|e| DigibotError::service_error("Webhook", &e))?;

        log::info!("📨 Webhook answered with status {}", status);
        Ok(())
    }

    fn relay_payload(raw: &str) -> DigibotResult<serde_json::Value> {
        let payload: serde_json::Value = serde_json::from_str(raw)?;
        if !payload.is_object() {
            return Err(DigibotError::validation_error(
                "payload",
                raw,
                "must be a JSON object",
                Some("Wrap the fields in {...}"),
            ));
        }
        Ok(payload)
    }

    fn load_config() -> DigibotResult<Config> {
        ConfigManager::load().map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'digibot init' to create a configuration file.");
            e
        })
    }

    fn read_report(file: &Path) -> DigibotResult<ParsedReport> {
        let text = fs::read_to_string(file)
            .map_err(|e| DigibotError::file_error(&file.display().to_string(), "read", &e.to_string()))?;

        log::info!("📄 Parsing report {}", file.display());
        Ok(parse_report_text(&text))
    }

    fn api_key(env_name: &str, field: &str) -> DigibotResult<String> {
        ConfigHelper::api_key_from_env(env_name).ok_or_else(|| {
            DigibotError::config_error(
                &format!("{} is not set", env_name),
                Some(field),
                Some(&format!("export {}=<your key>", env_name)),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_payload_must_be_an_object() {
        assert!(CommandRunner::relay_payload(r#"{"name":"Ayşe"}"#).is_ok());
        assert!(matches!(
            CommandRunner::relay_payload("[1, 2]"),
            Err(DigibotError::ValidationError { .. })
        ));
        assert!(matches!(
            CommandRunner::relay_payload("{"),
            Err(DigibotError::ParseError { .. })
        ));
    }
}
