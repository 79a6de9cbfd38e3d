use serde::{Deserialize, Serialize};

/// A visitor's request to receive their report by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEmail {
    pub to: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub report_id: String,
}
