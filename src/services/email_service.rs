use reqwest::Client;
use crate::enums::service_error::ServiceError;
use crate::helpers::text_helper::escape_html;
use crate::structs::config::email_config::EmailConfig;
use crate::structs::email::report_email::ReportEmail;
use crate::structs::email::resend_request::{ResendRequest, ResendResponse};

/// Sends report links through Resend.
pub struct EmailService {
    api_key: String,
    client: Client,
    config: EmailConfig,
}

impl EmailService {
    pub fn new(api_key: String, config: EmailConfig) -> Self {
        Self {
            api_key,
            client: Client::new(),
            config,
        }
    }

    pub fn validate(email: &ReportEmail) -> Result<(), ServiceError> {
        let to = email.to.trim();
        let valid_address = to
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !to.contains(' '));

        if !valid_address {
            return Err(ServiceError::InvalidRequest(format!("Invalid recipient address: {}", email.to)));
        }
        if email.report_id.trim().is_empty() {
            return Err(ServiceError::InvalidRequest("Report id is required".to_string()));
        }
        Ok(())
    }

    pub fn build_request(&self, email: &ReportEmail) -> ResendRequest {
        let greeting = match email.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => format!("Merhaba {},", escape_html(name)),
            None => "Merhaba,".to_string(),
        };

        let report_url = format!(
            "{}/{}",
            self.config.report_base_url.trim_end_matches('/'),
            email.report_id.trim()
        );

        let mut html = format!(
            "<p>{}</p><p>Dijital analiz raporunuz hazır. Raporu görüntülemek için <a href=\"{}\">buraya tıklayın</a>.</p>",
            greeting,
            escape_html(&report_url)
        );

        if let Some(message) = email.message.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            html.push_str(&format!("<p><em>Notunuz:</em> {}</p>", escape_html(message)));
        }

        ResendRequest {
            from: self.config.from.clone(),
            to: vec![email.to.trim().to_string()],
            subject: self.config.subject.clone(),
            html,
        }
    }

    /// Returns the provider's delivery id.
    pub async fn send_report(&self, email: &ReportEmail) -> Result<String, ServiceError> {
        Self::validate(email)?;

        let url = format!("{}/emails", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.build_request(email))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServiceError::from_status(status.as_u16(), error_text));
        }

        let body: ResendResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::SerializationError(e.to_string()))?;

        log::info!("📧 Report {} sent to {} (delivery id {})", email.report_id, email.to, body.id);
        Ok(body.id)
    }
}
