use reqwest::{Client, Method};
use serde_json::Value;
use crate::enums::service_error::ServiceError;
use crate::structs::config::webhook_config::WebhookConfig;

/// Forwards lead and chat events to an external automation hook.
pub struct WebhookRelay {
    client: Client,
    config: WebhookConfig,
}

impl WebhookRelay {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn method(&self) -> Result<Method, ServiceError> {
        Method::from_bytes(self.config.method.to_uppercase().as_bytes())
            .map_err(|_| ServiceError::InvalidRequest(format!("Invalid webhook method: {}", self.config.method)))
    }

    /// Returns the upstream status code.
    pub async fn relay(&self, payload: &Value) -> Result<u16, ServiceError> {
        let url = self
            .config
            .url
            .as_deref()
            .ok_or_else(|| ServiceError::InvalidRequest("Webhook URL is not configured".to_string()))?;

        let mut request = self.client.request(self.method()?, url).json(payload);
        for (name, value) in &self.config.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServiceError::from_status(status.as_u16(), error_text));
        }

        log::info!("🔗 Relayed payload to webhook ({})", status);
        Ok(status.as_u16())
    }
}
