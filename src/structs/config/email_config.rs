use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    #[serde(default = "ConfigHelper::default_resend_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_resend_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_email_from")]
    pub from: String,

    #[serde(default = "ConfigHelper::default_email_subject")]
    pub subject: String,

    /// Public page a report id is appended to in the email body.
    #[serde(default = "ConfigHelper::default_report_base_url")]
    pub report_base_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key_env: ConfigHelper::default_resend_api_key_env(),
            base_url: ConfigHelper::default_resend_base_url(),
            from: ConfigHelper::default_email_from(),
            subject: ConfigHelper::default_email_subject(),
            report_base_url: ConfigHelper::default_report_base_url(),
        }
    }
}
